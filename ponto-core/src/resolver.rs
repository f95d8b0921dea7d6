//! # Resolução da Entidade
//!
//! Orquestra a cascata de fallback que decide a quem o ponto é dedicado.
//! As estratégias rodam em ordem fixa de confiabilidade, cada uma como função
//! pura que devolve um resultado opcional:
//!
//! 1. **Saudação** — menções após "saravá", a pista mais inequívoca.
//! 2. **Auto-apresentação** — menções após "eu sou", quando a própria entidade
//!    se anuncia.
//! 3. **Rótulos de classe** — menções após "pomba gira" e "exu", combinadas.
//! 4. **Gênero por frequência** — sem nome resolvível, compara-se a contagem
//!    bruta dos dois rótulos para ao menos classificar o gênero.
//!
//! O reino é detectado de forma independente e anexado ao registro final.
//! Nenhuma estratégia falha: a ausência de informação vira campo ausente,
//! nunca erro.

use serde::{Deserialize, Serialize};

use crate::kingdom::KingdomDetector;
use crate::mentions::extract_mentions;
use crate::normalizer::normalize;
use crate::protagonist::select_protagonist;

/// Âncora de saudação ritual ("saravá", já normalizada).
pub const SALUTATION_ANCHOR: &str = "sarava";
/// Âncora de auto-apresentação ("eu sou").
pub const SELF_INTRODUCTION_ANCHOR: &str = "eu sou";
/// Rótulo da classe feminina de entidades.
pub const FEMALE_LABEL: &str = "pomba gira";
/// Rótulo da classe masculina de entidades.
pub const MALE_LABEL: &str = "exu";

/// Gênero atribuído quando nenhum nome pôde ser resolvido.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Neutral,
}

impl Gender {
    /// Nome do gênero em inglês, como aparece no resumo final.
    pub fn name(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Identidade resolvida: ou um nome, ou apenas um gênero.
///
/// O enum torna a exclusão mútua uma invariante de tipo — é impossível
/// construir um registro com nome **e** gênero ao mesmo tempo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DeityIdentity {
    /// O protagonista mais provável entre as menções extraídas.
    Named(String),
    /// Classificação grosseira quando nenhum nome foi encontrado.
    Unnamed(Gender),
}

/// O registro final de uma análise: identidade e, opcionalmente, reino.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deity {
    pub identity: DeityIdentity,
    /// Tradução em inglês do reino detectado, se houver.
    pub kingdom: Option<String>,
}

/// Estratégia 1: protagonista entre as menções de saudação, sem a âncora.
pub fn salutation_protagonist(ponto: &str) -> Option<String> {
    anchored_protagonist(SALUTATION_ANCHOR, ponto)
}

/// Estratégia 2: protagonista entre as auto-apresentações, sem a âncora.
pub fn self_introduction_protagonist(ponto: &str) -> Option<String> {
    anchored_protagonist(SELF_INTRODUCTION_ANCHOR, ponto)
}

fn anchored_protagonist(anchor: &str, ponto: &str) -> Option<String> {
    let candidates: Vec<String> = extract_mentions(anchor, ponto)
        .iter()
        .map(|m| m.after_anchor(anchor).to_string())
        .collect();
    select_protagonist(&candidates)
}

/// Estratégia 3: protagonista entre as menções dos dois rótulos de classe.
///
/// Aqui as menções entram **inteiras** (rótulo incluso): o nome resolvido fica
/// na forma "pomba gira molambe" ou "exu caveira". As listas são concatenadas
/// na ordem feminino-masculino antes da seleção.
pub fn label_mention_protagonist(ponto: &str) -> Option<String> {
    let mut candidates: Vec<String> = extract_mentions(FEMALE_LABEL, ponto)
        .into_iter()
        .map(|m| m.text)
        .collect();
    candidates.extend(extract_mentions(MALE_LABEL, ponto).into_iter().map(|m| m.text));
    select_protagonist(&candidates)
}

/// Contagens brutas dos rótulos de classe no texto (feminino, masculino).
///
/// Contagem de substring pura, sem extração de menções.
pub fn label_counts(ponto: &str) -> (usize, usize) {
    (
        ponto.matches(FEMALE_LABEL).count(),
        ponto.matches(MALE_LABEL).count(),
    )
}

/// Estratégia 4 (total): classifica o gênero pela frequência dos rótulos.
pub fn gender_by_label_frequency(ponto: &str) -> Gender {
    let (female, male) = label_counts(ponto);
    match female.cmp(&male) {
        std::cmp::Ordering::Greater => Gender::Female,
        std::cmp::Ordering::Equal => Gender::Neutral,
        std::cmp::Ordering::Less => Gender::Male,
    }
}

/// O resolvedor: normaliza o ponto, percorre a cascata e anexa o reino.
pub struct DeityResolver {
    detector: KingdomDetector,
}

impl DeityResolver {
    pub fn new(detector: KingdomDetector) -> Self {
        Self { detector }
    }

    /// O detector de reinos em uso (compartilhado com o pipeline observável).
    pub fn detector(&self) -> &KingdomDetector {
        &self.detector
    }

    /// Resolve o registro completo de um ponto bruto.
    ///
    /// Nunca falha: o pior caso é uma identidade de gênero neutro sem reino.
    pub fn resolve(&self, prayer: &str) -> Deity {
        let ponto = normalize(prayer);

        let identity = salutation_protagonist(&ponto)
            .or_else(|| self_introduction_protagonist(&ponto))
            .or_else(|| label_mention_protagonist(&ponto))
            .map(DeityIdentity::Named)
            .unwrap_or_else(|| DeityIdentity::Unnamed(gender_by_label_frequency(&ponto)));

        let kingdom = self.detector.detect(&ponto).map(|m| m.translation);

        Deity { identity, kingdom }
    }
}

impl Default for DeityResolver {
    fn default() -> Self {
        Self::new(KingdomDetector::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(text: &str) -> Deity {
        DeityResolver::default().resolve(text)
    }

    #[test]
    fn test_saudacao_tem_prioridade() {
        // "saravá" e "eu sou" presentes: a saudação vence
        let deity = resolve("Saravá Caveira! Eu sou Maria Padilha.");
        assert_eq!(deity.identity, DeityIdentity::Named("caveira".to_string()));
    }

    #[test]
    fn test_auto_apresentacao_como_segunda_opcao() {
        let deity = resolve("Eu sou Pomba Gira Rainha das Ruas.");
        assert_eq!(
            deity.identity,
            DeityIdentity::Named("pomba gira rainha das ruas".to_string())
        );
    }

    #[test]
    fn test_rotulos_carregam_a_ancora_no_nome() {
        let deity = resolve("Quem manda é Exú Caveira, quem manda é Exú Caveira.");
        assert_eq!(deity.identity, DeityIdentity::Named("exu caveira".to_string()));
    }

    #[test]
    fn test_fallback_de_genero_feminino() {
        // Três rótulos femininos, um masculino, nenhuma menção com nome
        let deity = resolve("Pomba Gira! Pomba Gira! Pomba Gira! Exú.");
        assert_eq!(deity.identity, DeityIdentity::Unnamed(Gender::Female));
    }

    #[test]
    fn test_fallback_de_genero_neutro_no_empate() {
        let deity = resolve("Exú! Pomba Gira!");
        assert_eq!(deity.identity, DeityIdentity::Unnamed(Gender::Neutral));
    }

    #[test]
    fn test_fallback_de_genero_masculino() {
        let deity = resolve("Exú! Exú! Pomba Gira!");
        assert_eq!(deity.identity, DeityIdentity::Unnamed(Gender::Male));
    }

    #[test]
    fn test_texto_vazio_vira_neutro_sem_reino() {
        let deity = resolve("");
        assert_eq!(deity.identity, DeityIdentity::Unnamed(Gender::Neutral));
        assert_eq!(deity.kingdom, None);
    }

    #[test]
    fn test_reino_e_independente_da_identidade() {
        let deity = resolve("Saravá Caveira na calunga!");
        assert_eq!(deity.identity, DeityIdentity::Named("caveira na calunga".to_string()));
        assert_eq!(deity.kingdom, Some("cemetery".to_string()));

        let deity = resolve("vou para a praia");
        assert_eq!(deity.identity, DeityIdentity::Unnamed(Gender::Neutral));
        assert_eq!(deity.kingdom, Some("beach".to_string()));
    }

    #[test]
    fn test_contagem_de_rotulos() {
        assert_eq!(label_counts("pomba gira e exu na encruzilhada, exu"), (1, 2));
    }
}
