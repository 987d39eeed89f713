//! DTOs do catálogo de serviços
//!
//! Espelham as respostas dos endpoints AJAX do servidor
//! (`/servicos/ajax/subcategorias/`, `/servicos/ajax/servico-info/`,
//! `/servicos/ajax/tipos-meia/`) e os dados embutidos na página.

use serde::{Deserialize, Serialize};

/// Categoria de serviço, renderizada no select principal do formulário
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Categoria {
    pub id: String,
    pub nome: String,
}

/// Item da lista de serviços de uma categoria
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicoResumo {
    pub id: String,
    pub nome: String,
}

/// Tipo de meia entrada (estudante, idoso, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TipoMeia {
    pub id: String,
    pub nome: String,
}

/// Opção de transfer oferecida na página, com preço unitário
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferOpcao {
    pub id: String,
    pub nome: String,
    #[serde(default)]
    pub valor: f64,
}

/// Regras de preço e elegibilidade de um serviço.
///
/// É congelada dentro de cada lançamento no momento em que ele é
/// adicionado à ordem, de forma que alterações posteriores do catálogo
/// não afetem itens já adicionados.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ServicoInfo {
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub valor_inteira: f64,
    #[serde(default)]
    pub valor_meia: f64,
    #[serde(default)]
    pub valor_infantil: f64,
    #[serde(default)]
    pub aceita_meia_entrada: bool,
    #[serde(default)]
    pub regras_meia_entrada: Option<String>,
    #[serde(default)]
    pub permite_infantil: bool,
    #[serde(default)]
    pub idade_minima_infantil: i32,
    #[serde(default)]
    pub idade_maxima_infantil: i32,
    #[serde(default)]
    pub possui_isencao: bool,
    #[serde(default)]
    pub idade_isencao_min: Option<i32>,
    #[serde(default)]
    pub idade_isencao_max: Option<i32>,
    #[serde(default)]
    pub texto_isencao: Option<String>,
    #[serde(default)]
    pub tem_idade_minima: bool,
    #[serde(default)]
    pub idade_minima: i32,
}

impl ServicoInfo {
    /// Faixa de isenção, quando ativa e completamente definida
    pub fn faixa_isencao(&self) -> Option<(i32, i32)> {
        if !self.possui_isencao {
            return None;
        }
        match (self.idade_isencao_min, self.idade_isencao_max) {
            (Some(min), Some(max)) => Some((min, max)),
            _ => None,
        }
    }
}
