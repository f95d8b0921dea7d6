//! # Pipeline — Orquestrador com Eventos Observáveis
//!
//! Compõe Normalizador → Resolvedor → Gerador de resumo atrás de uma única
//! operação `analyze`. A variante `analyze_streaming` emite um evento por
//! etapa via canal Rust (`mpsc`), permitindo que a camada de aplicação
//! acompanhe o "raciocínio" da cascata passo a passo (modo de rastreamento
//! da CLI).

use std::sync::mpsc;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::describer::describe;
use crate::kingdom::KingdomMatch;
use crate::mentions::{extract_mentions, Mention};
use crate::normalizer::normalize;
use crate::protagonist::select_protagonist;
use crate::resolver::{
    gender_by_label_frequency, label_counts, Deity, DeityIdentity, DeityResolver, Gender,
    FEMALE_LABEL, MALE_LABEL, SALUTATION_ANCHOR, SELF_INTRODUCTION_ANCHOR,
};

/// Eventos emitidos pelo pipeline durante o processamento.
///
/// Cada variante carrega os dados da etapa correspondente. A cascata é
/// avaliada preguiçosamente: estratégias após a primeira que resolve um nome
/// não geram eventos.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PipelineEvent {
    /// **Passo 1**: texto normalizado (minúsculas, ASCII puro).
    Normalized { ponto: String },
    /// **Passo 2 (loop)**: menções extraídas para uma âncora.
    MentionsExtracted {
        anchor: String,
        mentions: Vec<Mention>,
    },
    /// **Passo 3 (loop)**: resultado de uma estratégia da cascata.
    StrategyResolved {
        strategy: String,
        candidates: Vec<String>,
        name: Option<String>,
    },
    /// **Passo 4 (opcional)**: nenhuma estratégia nomeou a entidade; o gênero
    /// foi decidido pela frequência bruta dos rótulos.
    GenderFallback {
        female_count: usize,
        male_count: usize,
        gender: Gender,
    },
    /// **Passo 5**: resultado da detecção de reino (`None` quando nenhuma
    /// palavra-chave ocorre).
    KingdomDetected { kingdom: Option<KingdomMatch> },
    /// **Conclusão**: registro final, resumo e tempo de processamento.
    Done {
        deity: Deity,
        summary: String,
        processing_ms: u64,
    },
}

/// O pipeline de análise de pontos.
///
/// # Modos de Uso
/// - **Sync**: [`PontoPipeline::analyze`] para chamadas diretas.
/// - **Streaming**: [`PontoPipeline::analyze_streaming`] para rastreamento.
///
/// A análise é síncrona, sem estado compartilhado mutável: chamadores
/// concorrentes podem usar o mesmo pipeline sem qualquer trava.
pub struct PontoPipeline {
    resolver: DeityResolver,
}

impl PontoPipeline {
    /// Cria o pipeline com o vocabulário e a política padrão.
    pub fn new() -> Self {
        Self {
            resolver: DeityResolver::default(),
        }
    }

    /// Cria o pipeline com um resolvedor configurado (vocabulário ou política
    /// alternativos).
    pub fn with_resolver(resolver: DeityResolver) -> Self {
        Self { resolver }
    }

    /// Resolve o registro estruturado de um ponto.
    pub fn resolve(&self, prayer: &str) -> Deity {
        self.resolver.resolve(prayer)
    }

    /// Analisa um ponto e retorna o resumo em inglês.
    pub fn analyze(&self, prayer: &str) -> String {
        describe(&self.resolver.resolve(prayer))
    }

    /// Executa a análise emitindo um evento por etapa pelo canal `tx`.
    ///
    /// O resultado final chega no evento [`PipelineEvent::Done`], idêntico ao
    /// que [`PontoPipeline::analyze`] retornaria para o mesmo texto.
    pub fn analyze_streaming(&self, prayer: &str, tx: mpsc::Sender<PipelineEvent>) {
        let start = Instant::now();

        let ponto = normalize(prayer);
        let _ = tx.send(PipelineEvent::Normalized {
            ponto: ponto.clone(),
        });

        let mut name = streamed_anchor_strategy("salutation", SALUTATION_ANCHOR, &ponto, &tx);
        if name.is_none() {
            name = streamed_anchor_strategy(
                "self_introduction",
                SELF_INTRODUCTION_ANCHOR,
                &ponto,
                &tx,
            );
        }
        if name.is_none() {
            name = streamed_label_strategy(&ponto, &tx);
        }

        let identity = match name {
            Some(name) => DeityIdentity::Named(name),
            None => {
                let (female_count, male_count) = label_counts(&ponto);
                let gender = gender_by_label_frequency(&ponto);
                let _ = tx.send(PipelineEvent::GenderFallback {
                    female_count,
                    male_count,
                    gender,
                });
                DeityIdentity::Unnamed(gender)
            }
        };

        let kingdom = self.resolver.detector().detect(&ponto);
        let _ = tx.send(PipelineEvent::KingdomDetected {
            kingdom: kingdom.clone(),
        });

        let deity = Deity {
            identity,
            kingdom: kingdom.map(|m| m.translation),
        };
        let summary = describe(&deity);
        let _ = tx.send(PipelineEvent::Done {
            deity,
            summary,
            processing_ms: start.elapsed().as_millis() as u64,
        });
    }
}

impl Default for PontoPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Estratégia ancorada (saudação ou auto-apresentação): extrai, descarta a
/// âncora de cada menção e seleciona o protagonista, emitindo os eventos.
fn streamed_anchor_strategy(
    strategy: &str,
    anchor: &str,
    ponto: &str,
    tx: &mpsc::Sender<PipelineEvent>,
) -> Option<String> {
    let mentions = extract_mentions(anchor, ponto);
    let _ = tx.send(PipelineEvent::MentionsExtracted {
        anchor: anchor.to_string(),
        mentions: mentions.clone(),
    });

    let candidates: Vec<String> = mentions
        .iter()
        .map(|m| m.after_anchor(anchor).to_string())
        .collect();
    let name = select_protagonist(&candidates);
    let _ = tx.send(PipelineEvent::StrategyResolved {
        strategy: strategy.to_string(),
        candidates,
        name: name.clone(),
    });
    name
}

/// Estratégia de rótulos de classe: menções inteiras de "pomba gira" e "exu",
/// concatenadas nessa ordem.
fn streamed_label_strategy(ponto: &str, tx: &mpsc::Sender<PipelineEvent>) -> Option<String> {
    let mut candidates = Vec::new();
    for anchor in [FEMALE_LABEL, MALE_LABEL] {
        let mentions = extract_mentions(anchor, ponto);
        let _ = tx.send(PipelineEvent::MentionsExtracted {
            anchor: anchor.to_string(),
            mentions: mentions.clone(),
        });
        candidates.extend(mentions.into_iter().map(|m| m.text));
    }

    let name = select_protagonist(&candidates);
    let _ = tx.send(PipelineEvent::StrategyResolved {
        strategy: "deity_labels".to_string(),
        candidates,
        name: name.clone(),
    });
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{
        PONTO_EXU_CAVEIRA, PONTO_MARIA_MOLAMBO, PONTO_RAINHA_DAS_RUAS, PONTO_TRANCA_RUA,
    };

    #[test]
    fn test_cenario_saudacao_repetida() {
        // Cenário A: saudação com nome consistente, sem palavras de reino
        let pipeline = PontoPipeline::new();
        assert_eq!(
            pipeline.analyze("Saravá Caveira, Saravá Caveira!"),
            "This prayer appears to be about caveira."
        );
    }

    #[test]
    fn test_cenario_reino_unico() {
        // Cenário D: uma única palavra de reino, tradução correta independente
        // da política
        let pipeline = PontoPipeline::new();
        assert_eq!(
            pipeline.analyze("vou para a praia"),
            "This prayer appears to be about an unknown neutral deity, belonging to the kingdom of the beach."
        );
    }

    #[test]
    fn test_ponto_maria_molambo() {
        // Nenhuma saudação ou auto-apresentação: resolve pelos rótulos de classe
        let pipeline = PontoPipeline::new();
        assert_eq!(
            pipeline.analyze(PONTO_MARIA_MOLAMBO),
            "This prayer appears to be about pomba gira molambe."
        );
    }

    #[test]
    fn test_ponto_rainha_das_ruas() {
        let pipeline = PontoPipeline::new();
        assert_eq!(
            pipeline.analyze(PONTO_RAINHA_DAS_RUAS),
            "This prayer appears to be about pomba gira rainha das ruas."
        );
    }

    #[test]
    fn test_ponto_exu_caveira() {
        let pipeline = PontoPipeline::new();
        assert_eq!(
            pipeline.analyze(PONTO_EXU_CAVEIRA),
            "This prayer appears to be about exu caveira, belonging to the kingdom of the cemetery."
        );
    }

    #[test]
    fn test_ponto_tranca_rua() {
        // "EXU (2X)" não gera menção (parêntese após o espaço): cai no
        // fallback de gênero, com o reino das almas detectado à parte
        let pipeline = PontoPipeline::new();
        assert_eq!(
            pipeline.analyze(PONTO_TRANCA_RUA),
            "This prayer appears to be about an unknown male deity, belonging to the kingdom of the souls."
        );
    }

    #[test]
    fn test_streaming_comeca_normalizado_e_termina_done() {
        let pipeline = PontoPipeline::new();
        let (tx, rx) = mpsc::channel();
        pipeline.analyze_streaming(PONTO_EXU_CAVEIRA, tx);

        let events: Vec<PipelineEvent> = rx.try_iter().collect();
        assert!(!events.is_empty());
        assert!(matches!(&events[0], PipelineEvent::Normalized { .. }));
        assert!(matches!(events.last().unwrap(), PipelineEvent::Done { .. }));
    }

    #[test]
    fn test_streaming_concorda_com_analyze() {
        let pipeline = PontoPipeline::new();
        for ponto in [
            PONTO_MARIA_MOLAMBO,
            PONTO_RAINHA_DAS_RUAS,
            PONTO_EXU_CAVEIRA,
            PONTO_TRANCA_RUA,
        ] {
            let (tx, rx) = mpsc::channel();
            pipeline.analyze_streaming(ponto, tx);
            let done_summary = rx
                .try_iter()
                .find_map(|event| match event {
                    PipelineEvent::Done { summary, .. } => Some(summary),
                    _ => None,
                })
                .unwrap();
            assert_eq!(done_summary, pipeline.analyze(ponto));
        }
    }

    #[test]
    fn test_estrategias_posteriores_nao_emitem_eventos() {
        // A auto-apresentação resolve: a estratégia de rótulos não deve rodar
        let pipeline = PontoPipeline::new();
        let (tx, rx) = mpsc::channel();
        pipeline.analyze_streaming(PONTO_RAINHA_DAS_RUAS, tx);

        let strategies: Vec<String> = rx
            .try_iter()
            .filter_map(|event| match event {
                PipelineEvent::StrategyResolved { strategy, .. } => Some(strategy),
                _ => None,
            })
            .collect();
        assert_eq!(strategies, vec!["salutation", "self_introduction"]);
    }

    #[test]
    fn test_eventos_serializam_em_json() {
        let event = PipelineEvent::GenderFallback {
            female_count: 3,
            male_count: 1,
            gender: Gender::Female,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"GenderFallback\""));
        assert!(json.contains("\"female\""));
    }
}
