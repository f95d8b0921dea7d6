//! # Normalizador de Texto
//!
//! Reduz o texto bruto do ponto a uma forma canônica: minúsculas, sem acentos
//! e sem qualquer caractere fora do ASCII. Todos os estágios seguintes (âncoras,
//! contagem de palavras-chave) assumem que os acentos já sumiram — "Exú" e "exu"
//! precisam contar como a mesma coisa.

use unicode_normalization::UnicodeNormalization;

/// Normaliza o texto de um ponto.
///
/// Três passos, nesta ordem:
/// 1. Minúsculas (`to_lowercase`).
/// 2. Decomposição de compatibilidade NFKD — "é" vira "e" + acento combinante,
///    "…" vira "...".
/// 3. Descarte de todo caractere não-ASCII, o que elimina os acentos combinantes
///    e qualquer símbolo decorativo.
///
/// A função é total (nunca falha, inclusive para a string vazia) e idempotente:
/// normalizar uma saída de `normalize` a devolve inalterada.
pub fn normalize(text: &str) -> String {
    text.to_lowercase().nfkd().filter(char::is_ascii).collect()
}
