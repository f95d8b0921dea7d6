//! # ponto-core — Análise de Pontos de Quimbanda
//!
//! Este crate implementa um pipeline para Extração de Informação em pontos (orações
//! cantadas) da Quimbanda do norte do Brasil, escritos em Português. O resultado é
//! um resumo em inglês da provável entidade invocada e do reino ao qual o ponto
//! pertence — triagem automática rápida para quem explora um corpus desses textos.
//!
//! ## Arquitetura do Sistema
//!
//! O sistema segue uma arquitetura de pipeline linear, onde o dado flui e é
//! transformado passo a passo:
//!
//! 1.  **Entrada**: Texto bruto do ponto (String), possivelmente com acentos e caixa mista.
//! 2.  **Normalização** ([`normalizer`]): minúsculas + decomposição NFKD + descarte de não-ASCII.
//! 3.  **Extração de Menções** ([`mentions`]): fatias do texto imediatamente após âncoras
//!     lexicais fixas ("saravá", "eu sou", "pomba gira", "exu").
//! 4.  **Seleção do Protagonista** ([`protagonist`]): a menção mais frequente entre as candidatas.
//! 5.  **Detecção do Reino** ([`kingdom`]): frequência de palavras-chave de um vocabulário fixo.
//! 6.  **Resolução** ([`resolver`]): cascata de estratégias que monta o registro da entidade.
//! 7.  **Saída** ([`describer`]): frase em inglês descrevendo entidade e reino.
//!
//! Não há qualquer compreensão real de linguagem natural aqui: tudo é casamento
//! lexical puro, no espírito de um motor de regras.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use ponto_core::PontoPipeline;
//!
//! let pipeline = PontoPipeline::new();
//! let resumo = pipeline.analyze("Saravá Exú Tranca Rua, saravá Exú Tranca Rua!");
//! assert_eq!(resumo, "This prayer appears to be about exu tranca rua.");
//! ```
//!
//! ## Módulos Principais
//!
//! - [`pipeline`]: Orquestrador principal, com variante observável por eventos.
//! - [`resolver`]: A cascata de fallback que decide nome ou gênero.
//! - [`corpus`]: Pontos de exemplo para demonstração e testes.

pub mod corpus;
pub mod describer;
pub mod kingdom;
pub mod mentions;
pub mod normalizer;
pub mod pipeline;
pub mod protagonist;
pub mod resolver;

pub use describer::describe;
pub use kingdom::{
    KingdomDetector, KingdomEntry, KingdomMatch, KingdomPolicy, KingdomVocabulary,
    VocabularyError,
};
pub use mentions::{extract_mentions, Mention};
pub use normalizer::normalize;
pub use pipeline::{PipelineEvent, PontoPipeline};
pub use protagonist::select_protagonist;
pub use resolver::{Deity, DeityIdentity, DeityResolver, Gender};

/// Analisa um ponto com a configuração padrão e retorna o resumo em inglês.
///
/// Atalho para `PontoPipeline::new().analyze(text)`.
pub fn analyze(text: &str) -> String {
    PontoPipeline::new().analyze(text)
}
