//! # Seleção do Protagonista
//!
//! Dado o conjunto de menções candidatas, elege a mais frequente como o provável
//! dedicatário do ponto. Variantes de grafia ainda contam como entradas
//! distintas ("molambo" vs "molambe"); unificá-las exigiria distância de edição
//! ou normalização fonética, fora do escopo atual.

use std::collections::HashMap;

/// Retorna a menção mais frequente da lista, ou `None` se a lista for vazia.
///
/// ## Desempate
///
/// Quando mais de um valor distinto compartilha a contagem máxima, vence o que
/// aparece primeiro no texto. A implementação de referência delegava o desempate
/// à ordem arbitrária de iteração de um conjunto; aqui o critério é
/// determinístico de propósito, para que a mesma entrada produza sempre a mesma
/// saída.
pub fn select_protagonist(mentions: &[String]) -> Option<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for mention in mentions {
        *counts.entry(mention.as_str()).or_insert(0) += 1;
    }

    let mut best: Option<&str> = None;
    let mut best_count = 0;
    for mention in mentions {
        let count = counts[mention.as_str()];
        if count > best_count {
            best_count = count;
            best = Some(mention);
        }
    }

    best.map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lista(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_lista_vazia() {
        assert_eq!(select_protagonist(&[]), None);
    }

    #[test]
    fn test_elemento_unico() {
        assert_eq!(
            select_protagonist(&lista(&["exu caveira"])),
            Some("exu caveira".to_string())
        );
    }

    #[test]
    fn test_mais_frequente_vence_independente_da_posicao() {
        let mentions = lista(&["padilha", "molambo", "molambo", "padilha", "molambo"]);
        assert_eq!(select_protagonist(&mentions), Some("molambo".to_string()));
    }

    #[test]
    fn test_empate_vence_a_primeira_aparicao() {
        let mentions = lista(&["padilha", "molambo", "molambo", "padilha"]);
        assert_eq!(select_protagonist(&mentions), Some("padilha".to_string()));
    }
}
