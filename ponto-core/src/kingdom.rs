//! # Detecção de Reinos
//!
//! Um "reino" é o domínio simbólico de experiência associado a uma entidade
//! (encruzilhada, calunga, praia...). A detecção é puramente lexical: conta-se
//! cada palavra-chave do vocabulário no texto normalizado e escolhe-se uma
//! delas segundo a política configurada.
//!
//! ## A política de seleção
//!
//! A implementação de referência ordenava os reinos candidatos por contagem
//! **crescente** e pegava o primeiro — ou seja, o reino *menos* citado — embora
//! os comentários ao redor deixem claro que a intenção era o reino dominante.
//! Esse quase-certo defeito é preservado aqui como opção explícita
//! ([`KingdomPolicy::Legacy`]) em vez de corrigido em silêncio; o padrão é a
//! variante corrigida ([`KingdomPolicy::Dominant`]).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Um par (palavra-chave em português, tradução em inglês) do vocabulário.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KingdomEntry {
    /// Palavra-chave procurada no texto normalizado (ex: "calunga").
    pub keyword: String,
    /// Tradução usada no resumo final (ex: "cemetery").
    pub translation: String,
}

impl KingdomEntry {
    fn new(keyword: &str, translation: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
            translation: translation.to_string(),
        }
    }
}

/// Erros de construção do vocabulário de reinos.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VocabularyError {
    /// Duas entradas com a mesma palavra-chave tornariam a tradução ambígua.
    #[error("palavra-chave duplicada no vocabulário: {0:?}")]
    DuplicateKeyword(String),
    /// Palavra-chave vazia casaria em qualquer texto.
    #[error("palavra-chave vazia no vocabulário")]
    EmptyKeyword,
}

/// Vocabulário de reinos: mapeamento ordenado e imutável de palavras-chave
/// para traduções.
///
/// É configuração injetada, não um global escondido — o detector pode ser
/// testado (ou estendido pela camada de aplicação) com vocabulários
/// alternativos. A ordem das entradas importa: ela é o critério determinístico
/// de desempate entre reinos com a mesma contagem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KingdomVocabulary {
    entries: Vec<KingdomEntry>,
}

impl KingdomVocabulary {
    /// Constrói um vocabulário validando as invariantes: chaves únicas e não
    /// vazias.
    pub fn new(entries: Vec<KingdomEntry>) -> Result<Self, VocabularyError> {
        for (i, entry) in entries.iter().enumerate() {
            if entry.keyword.is_empty() {
                return Err(VocabularyError::EmptyKeyword);
            }
            if entries[..i].iter().any(|e| e.keyword == entry.keyword) {
                return Err(VocabularyError::DuplicateKeyword(entry.keyword.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// As entradas, na ordem de inserção.
    pub fn entries(&self) -> &[KingdomEntry] {
        &self.entries
    }
}

impl Default for KingdomVocabulary {
    /// A tabela fixa de reinos da tradição, na grafia já normalizada.
    fn default() -> Self {
        Self {
            entries: vec![
                KingdomEntry::new("encruzilhada", "crossroads"),
                KingdomEntry::new("cruzeiro", "votary cross"),
                KingdomEntry::new("matas", "fields or weeds"),
                KingdomEntry::new("calunga", "cemetery"),
                KingdomEntry::new("almas", "souls"),
                KingdomEntry::new("lira", "harp"),
                KingdomEntry::new("praia", "beach"),
            ],
        }
    }
}

/// Política de escolha entre os reinos candidatos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KingdomPolicy {
    /// Escolhe o reino de **maior** contagem — o comportamento pretendido e o
    /// padrão deste crate.
    Dominant,
    /// Escolhe o reino de **menor** contagem, reproduzindo a ordenação
    /// crescente da implementação de referência. Útil apenas para paridade de
    /// saída com o sistema antigo.
    Legacy,
}

impl Default for KingdomPolicy {
    fn default() -> Self {
        KingdomPolicy::Dominant
    }
}

/// Um reino detectado, com a contagem que o elegeu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KingdomMatch {
    pub keyword: String,
    pub translation: String,
    pub count: usize,
}

/// Detector de reinos sobre texto normalizado.
pub struct KingdomDetector {
    vocabulary: KingdomVocabulary,
    policy: KingdomPolicy,
}

impl KingdomDetector {
    pub fn new(vocabulary: KingdomVocabulary, policy: KingdomPolicy) -> Self {
        Self { vocabulary, policy }
    }

    pub fn policy(&self) -> KingdomPolicy {
        self.policy
    }

    /// Detecta o reino do ponto, ou `None` se nenhuma palavra-chave ocorrer.
    ///
    /// A contagem é de substrings puras, sem fronteira de palavra: "delirava"
    /// contém "lira". Empates entre contagens iguais são resolvidos pela ordem
    /// do vocabulário.
    pub fn detect(&self, ponto: &str) -> Option<KingdomMatch> {
        let mut chosen: Option<(&KingdomEntry, usize)> = None;

        for entry in self.vocabulary.entries() {
            let count = ponto.matches(entry.keyword.as_str()).count();
            if count == 0 {
                continue;
            }
            let replace = match (&chosen, self.policy) {
                (None, _) => true,
                (Some((_, best)), KingdomPolicy::Dominant) => count > *best,
                (Some((_, best)), KingdomPolicy::Legacy) => count < *best,
            };
            if replace {
                chosen = Some((entry, count));
            }
        }

        chosen.map(|(entry, count)| KingdomMatch {
            keyword: entry.keyword.clone(),
            translation: entry.translation.clone(),
            count,
        })
    }
}

impl Default for KingdomDetector {
    fn default() -> Self {
        Self::new(KingdomVocabulary::default(), KingdomPolicy::default())
    }
}
