//! Classificação etária de crianças em um serviço
//!
//! Função pura sobre a idade digitada e as regras do serviço. A ordem
//! dos testes é contrato: idade mínima bloqueia antes da isenção, e a
//! isenção vence a faixa infantil.

use serde::{Deserialize, Serialize};

use super::catalogo::ServicoInfo;
use crate::shared::format::formatar_moeda;

/// Resultado da classificação de uma idade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FaixaEtaria {
    /// Abaixo da idade mínima do serviço; bloqueia o lançamento
    Invalida,
    /// Dentro da faixa de isenção; não paga
    Isenta,
    /// Dentro da faixa infantil; paga valor infantil
    Infantil,
    /// Qualquer outra idade; paga inteira
    Inteira,
}

impl FaixaEtaria {
    /// Classe CSS aplicada ao input de idade correspondente
    pub fn classe_css(&self) -> &'static str {
        match self {
            FaixaEtaria::Invalida => "invalido",
            FaixaEtaria::Isenta => "isento",
            FaixaEtaria::Infantil => "infantil",
            FaixaEtaria::Inteira => "inteira",
        }
    }

    /// Texto do tooltip exibido junto ao input de idade
    pub fn rotulo(&self, info: &ServicoInfo) -> String {
        match self {
            FaixaEtaria::Invalida => format!(
                "Idade abaixo da mínima permitida ({} anos)",
                info.idade_minima
            ),
            FaixaEtaria::Isenta => "Isento (grátis)".to_string(),
            FaixaEtaria::Infantil => {
                format!("Paga Infantil ({})", formatar_moeda(info.valor_infantil))
            }
            FaixaEtaria::Inteira => {
                format!("Paga Inteira ({})", formatar_moeda(info.valor_inteira))
            }
        }
    }
}

/// Classifica uma idade segundo as regras do serviço.
///
/// 1. idade mínima ativa e idade abaixo dela → `Invalida`
/// 2. faixa de isenção ativa e idade dentro dela → `Isenta`
/// 3. infantil permitido e idade na faixa infantil → `Infantil`
/// 4. caso contrário → `Inteira`
pub fn classificar_idade(idade: i32, info: &ServicoInfo) -> FaixaEtaria {
    if info.tem_idade_minima && idade < info.idade_minima {
        return FaixaEtaria::Invalida;
    }

    if let Some((min, max)) = info.faixa_isencao() {
        if idade >= min && idade <= max {
            return FaixaEtaria::Isenta;
        }
    }

    if info.permite_infantil
        && idade >= info.idade_minima_infantil
        && idade <= info.idade_maxima_infantil
    {
        return FaixaEtaria::Infantil;
    }

    FaixaEtaria::Inteira
}

/// Linha da tabela "Resumo de Faixas Etárias" exibida na legenda de regras
#[derive(Debug, Clone, PartialEq)]
pub struct FaixaPreco {
    pub nome: &'static str,
    pub idade: String,
    pub valor: String,
    pub classe: &'static str,
}

/// Monta as faixas de preço exibidas ao usuário, ordenadas por idade.
pub fn faixas_precos(info: &ServicoInfo) -> Vec<FaixaPreco> {
    let mut faixas = Vec::new();

    let idade_inteira = if info.permite_infantil {
        format!("Acima de {} anos", info.idade_maxima_infantil)
    } else if let Some((_, max)) = info.faixa_isencao() {
        format!("Acima de {} anos", max)
    } else if info.tem_idade_minima {
        format!("A partir de {} anos", info.idade_minima)
    } else {
        "Todas as idades".to_string()
    };

    if let Some((min, max)) = info.faixa_isencao() {
        faixas.push(FaixaPreco {
            nome: "🎁 Isento",
            idade: format!("{} - {} anos", min, max),
            valor: "Grátis".to_string(),
            classe: "table-success",
        });
    }

    if info.permite_infantil {
        faixas.push(FaixaPreco {
            nome: "👶 Infantil",
            idade: format!(
                "{} - {} anos",
                info.idade_minima_infantil, info.idade_maxima_infantil
            ),
            valor: formatar_moeda(info.valor_infantil),
            classe: "table-info",
        });
    }

    faixas.push(FaixaPreco {
        nome: "👤 Inteira",
        idade: idade_inteira,
        valor: formatar_moeda(info.valor_inteira),
        classe: "table-warning",
    });

    faixas
}

#[cfg(test)]
mod tests {
    use super::*;

    fn servico_completo() -> ServicoInfo {
        ServicoInfo {
            nome: "Passeio de Escuna".to_string(),
            valor_inteira: 100.0,
            valor_meia: 50.0,
            valor_infantil: 30.0,
            aceita_meia_entrada: true,
            permite_infantil: true,
            idade_minima_infantil: 5,
            idade_maxima_infantil: 11,
            possui_isencao: true,
            idade_isencao_min: Some(0),
            idade_isencao_max: Some(4),
            tem_idade_minima: false,
            ..Default::default()
        }
    }

    #[test]
    fn isencao_antes_da_faixa_infantil() {
        let info = servico_completo();
        assert_eq!(classificar_idade(3, &info), FaixaEtaria::Isenta);
        assert_eq!(classificar_idade(4, &info), FaixaEtaria::Isenta);
        assert_eq!(classificar_idade(5, &info), FaixaEtaria::Infantil);
        assert_eq!(classificar_idade(10, &info), FaixaEtaria::Infantil);
        assert_eq!(classificar_idade(12, &info), FaixaEtaria::Inteira);
    }

    #[test]
    fn idade_minima_vence_isencao() {
        // Idade dentro da faixa de isenção mas abaixo da mínima é
        // inválida, não isenta.
        let info = ServicoInfo {
            tem_idade_minima: true,
            idade_minima: 5,
            ..servico_completo()
        };
        assert_eq!(classificar_idade(4, &info), FaixaEtaria::Invalida);
        assert_eq!(classificar_idade(3, &info), FaixaEtaria::Invalida);
        assert_eq!(classificar_idade(10, &info), FaixaEtaria::Infantil);
    }

    #[test]
    fn sem_regras_tudo_paga_inteira() {
        let info = ServicoInfo {
            valor_inteira: 80.0,
            ..Default::default()
        };
        assert_eq!(classificar_idade(0, &info), FaixaEtaria::Inteira);
        assert_eq!(classificar_idade(7, &info), FaixaEtaria::Inteira);
        assert_eq!(classificar_idade(70, &info), FaixaEtaria::Inteira);
    }

    #[test]
    fn isencao_incompleta_e_ignorada() {
        // possui_isencao sem as duas bordas definidas não isenta ninguém
        let info = ServicoInfo {
            possui_isencao: true,
            idade_isencao_min: Some(0),
            idade_isencao_max: None,
            ..Default::default()
        };
        assert_eq!(classificar_idade(2, &info), FaixaEtaria::Inteira);
    }

    #[test]
    fn rotulos_e_classes() {
        let info = servico_completo();
        assert_eq!(FaixaEtaria::Isenta.classe_css(), "isento");
        assert_eq!(
            FaixaEtaria::Infantil.rotulo(&info),
            "Paga Infantil (R$ 30,00)"
        );
        assert_eq!(
            FaixaEtaria::Inteira.rotulo(&info),
            "Paga Inteira (R$ 100,00)"
        );
    }

    #[test]
    fn faixas_precos_ordenadas() {
        let faixas = faixas_precos(&servico_completo());
        assert_eq!(faixas.len(), 3);
        assert_eq!(faixas[0].nome, "🎁 Isento");
        assert_eq!(faixas[0].idade, "0 - 4 anos");
        assert_eq!(faixas[0].valor, "Grátis");
        assert_eq!(faixas[1].nome, "👶 Infantil");
        assert_eq!(faixas[2].idade, "Acima de 11 anos");
    }

    #[test]
    fn faixa_inteira_sem_infantil() {
        let info = ServicoInfo {
            permite_infantil: false,
            ..servico_completo()
        };
        let faixas = faixas_precos(&info);
        assert_eq!(faixas.last().unwrap().idade, "Acima de 4 anos");

        let so_minima = ServicoInfo {
            tem_idade_minima: true,
            idade_minima: 8,
            ..Default::default()
        };
        let faixas = faixas_precos(&so_minima);
        assert_eq!(faixas.last().unwrap().idade, "A partir de 8 anos");
    }
}
