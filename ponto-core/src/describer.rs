//! # Gerador do Resumo
//!
//! Converte o registro resolvido em uma frase em inglês. Função pura: o mesmo
//! registro produz sempre a mesma frase; imprimir ou registrar o resultado é
//! responsabilidade da camada de aplicação.

use crate::resolver::{Deity, DeityIdentity};

/// Início fixo de todo resumo.
pub const LEAD_IN: &str = "This prayer appears to be about ";

/// Descreve o registro em uma frase.
///
/// A frase começa com [`LEAD_IN`], segue com o nome (aparado) ou com a
/// classificação de gênero, recebe a cláusula de reino quando houver e termina
/// com ponto final.
pub fn describe(deity: &Deity) -> String {
    let mut description = String::from(LEAD_IN);

    match &deity.identity {
        DeityIdentity::Named(name) => description.push_str(name.trim()),
        DeityIdentity::Unnamed(gender) => {
            description.push_str("an unknown ");
            description.push_str(gender.name());
            description.push_str(" deity");
        }
    }

    if let Some(kingdom) = &deity.kingdom {
        description.push_str(", belonging to the kingdom of the ");
        description.push_str(kingdom);
    }

    description.push('.');
    description
}
