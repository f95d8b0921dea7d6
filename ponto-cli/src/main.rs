//! Interface de linha de comando: lê um ponto (arquivo, argumento ou corpus
//! embutido), roda o pipeline e imprime o resumo em inglês.

use std::fs;
use std::path::PathBuf;
use std::sync::mpsc;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use ponto_core::corpus::sample_pontos;
use ponto_core::{
    DeityResolver, KingdomDetector, KingdomPolicy, KingdomVocabulary, PontoPipeline,
};
use tracing::info;

/// Espelho de [`KingdomPolicy`] para o `ValueEnum` da clap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CliKingdomPolicy {
    /// Reino de maior contagem (comportamento corrigido, padrão)
    Dominant,
    /// Reino de menor contagem (paridade com a implementação original)
    Legacy,
}

impl From<CliKingdomPolicy> for KingdomPolicy {
    fn from(policy: CliKingdomPolicy) -> Self {
        match policy {
            CliKingdomPolicy::Dominant => KingdomPolicy::Dominant,
            CliKingdomPolicy::Legacy => KingdomPolicy::Legacy,
        }
    }
}

#[derive(Parser)]
#[command(
    name = "ponto",
    about = "Analisa pontos de Quimbanda em português e resume em inglês a provável entidade e o reino"
)]
struct Cli {
    /// Arquivo com o texto do ponto
    file: Option<PathBuf>,

    /// Texto do ponto passado diretamente
    #[arg(long, conflicts_with = "file")]
    text: Option<String>,

    /// Analisa os pontos de exemplo embutidos
    #[arg(long, conflicts_with_all = ["file", "text"])]
    demo: bool,

    /// Política de seleção do reino
    #[arg(long, value_enum, default_value_t = CliKingdomPolicy::Dominant)]
    policy: CliKingdomPolicy,

    /// Imprime o registro estruturado em JSON em vez da frase
    #[arg(long)]
    json: bool,

    /// Registra os eventos intermediários do pipeline
    #[arg(long)]
    trace: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let cli = Cli::parse();
    let detector = KingdomDetector::new(KingdomVocabulary::default(), cli.policy.into());
    let pipeline = PontoPipeline::with_resolver(DeityResolver::new(detector));

    if cli.demo {
        for ponto in sample_pontos() {
            info!("Analisando ponto de exemplo: {}", ponto.title);
            run(&pipeline, ponto.text, &cli)?;
        }
        return Ok(());
    }

    let text = if let Some(text) = &cli.text {
        text.clone()
    } else if let Some(path) = &cli.file {
        fs::read_to_string(path)
            .with_context(|| format!("falha ao ler o arquivo {}", path.display()))?
    } else {
        bail!("nenhuma fonte de texto: informe um arquivo, --text ou --demo");
    };

    run(&pipeline, &text, &cli)
}

fn run(pipeline: &PontoPipeline, text: &str, cli: &Cli) -> Result<()> {
    if cli.trace {
        let (tx, rx) = mpsc::channel();
        pipeline.analyze_streaming(text, tx);
        for event in rx.try_iter() {
            info!(evento = %serde_json::to_string(&event)?, "etapa do pipeline");
        }
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&pipeline.resolve(text))?);
    } else {
        println!("{}", pipeline.analyze(text));
    }
    Ok(())
}
