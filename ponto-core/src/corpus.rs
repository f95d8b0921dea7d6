//! # Corpus de Pontos
//!
//! Pontos reais da tradição, transcritos na grafia original (acentos, caixa
//! mista, repetições marcadas com "bis"/"2X"). Servem de dados de demonstração
//! para a CLI e de casos de ponta a ponta para os testes.

/// Um ponto de exemplo com um título de referência.
pub struct SamplePonto {
    pub title: &'static str,
    pub text: &'static str,
}

/// Ponto a Maria Molambo.
pub const PONTO_MARIA_MOLAMBO: &str = "
Maria Molambo,
Você não é brincadeira.
Maria Molambo,
Você mora na ladeira. (bis)
A capa encarnada,

Que eu mandei fazer,
Não é para o exú,
É pra Maria Molambê. (bis)
Olha minha gente,
Ela é farrapo só!…(bis)
È Pomba Gira Maria Molambo,
Ela é farrapo só!…(bis)

Mas que caminho tão escuro,
Que caminho tão escuro,
Que passa aquela moça,
Com sua saia de chita,
Estralando osso,
Só osso, só osso,…
Mas olha minha gente…

Quem mora na porta da lomba,
É a Pomba Gira Molambê,
Exú que mora na porta da lomba,
É Pomba Gira Molambê…
Peço licença Exú Olodê!…

Viemos coroar Pomba Gira Molambê.
";

/// Ponto à Rainha das Ruas.
pub const PONTO_RAINHA_DAS_RUAS: &str = "
Não é a toa que eu tenho um trono,
Não é a toa que eu tenho uma coroa. (bis)
Eu agradeço ao Senhor das Alturas,
Eu sou Pomba Gira Rainha das Ruas.
";

/// Ponto a Exú Caveira.
pub const PONTO_EXU_CAVEIRA: &str = "
PORTÃO DE FERRRO, CADEADO DE MADEIRA
PORTÃO DE FERRO, CADEADO DE MADEIRA
NA PORTA DA CALUNGA QUEM MANDA É EXÚ CAVEIRA
NA PORTA DA CALUNGA QUEM MANDA É EXÚ CAVEIRA
";

/// Ponto a Tranca Rua das Almas.
pub const PONTO_TRANCA_RUA: &str = "
QUEM É QUE DESCEU DO REINO, QUEM É EXU (2X)
ELE É TRANCA RUA DAS ALMAS, ELE É (2X)
";

/// Retorna os pontos de exemplo, na ordem do corpus original.
pub fn sample_pontos() -> Vec<SamplePonto> {
    vec![
        SamplePonto {
            title: "Maria Molambo",
            text: PONTO_MARIA_MOLAMBO,
        },
        SamplePonto {
            title: "Rainha das Ruas",
            text: PONTO_RAINHA_DAS_RUAS,
        },
        SamplePonto {
            title: "Exú Caveira",
            text: PONTO_EXU_CAVEIRA,
        },
        SamplePonto {
            title: "Tranca Rua das Almas",
            text: PONTO_TRANCA_RUA,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corpus_completo() {
        let pontos = sample_pontos();
        assert_eq!(pontos.len(), 4);
        assert!(pontos.iter().all(|p| !p.text.trim().is_empty()));
    }
}
