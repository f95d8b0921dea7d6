//! # Extrator de Menções
//!
//! Captura fatias do texto imediatamente após uma frase-âncora fixa ("saravá",
//! "eu sou", "pomba gira", "exu"), até a próxima pontuação, dígito ou quebra de
//! linha. Esse critério simples tem se mostrado o de melhor resultado para
//! delimitar o fim do trecho relevante.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Uma menção capturada no texto normalizado.
///
/// Guarda o trecho casado completo (âncora inclusa) e sua posição original em
/// bytes, o que permite destacar a menção no texto de origem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mention {
    /// O trecho casado, incluindo a própria âncora (ex: "sarava exu caveira").
    pub text: String,
    /// Índice de byte inicial no texto normalizado (inclusive).
    pub start: usize,
    /// Índice de byte final no texto normalizado (exclusivo).
    pub end: usize,
}

impl Mention {
    /// Retorna apenas as palavras após a âncora, descartando a âncora e o
    /// espaço que a segue.
    ///
    /// O padrão de captura garante que toda menção começa com a âncora seguida
    /// de um espaço e ao menos uma letra, então a fatia é sempre válida.
    pub fn after_anchor<'a>(&'a self, anchor: &str) -> &'a str {
        &self.text[anchor.len() + 1..]
    }
}

/// Extrai todas as menções ancoradas em `anchor` no texto (já normalizado).
///
/// Casa ocorrências não sobrepostas da âncora literal seguida de um espaço e de
/// uma sequência de letras e espaços (`[a-zA-Z ]+`). O casamento para na
/// primeira pontuação, dígito ou quebra de linha.
///
/// As menções voltam na ordem em que aparecem no texto, com duplicatas
/// preservadas — a contagem de frequência do protagonista depende disso.
/// Âncora ausente produz um vetor vazio.
pub fn extract_mentions(anchor: &str, text: &str) -> Vec<Mention> {
    let pattern = format!("{} [a-zA-Z ]+", regex::escape(anchor));
    let re = Regex::new(&pattern).expect("padrão de âncora válido após escape");

    re.find_iter(text)
        .map(|m| Mention {
            text: m.as_str().to_string(),
            start: m.start(),
            end: m.end(),
        })
        .collect()
}
