//! Payloads trocados com o servidor ao salvar e traduzir a ordem

use serde::{Deserialize, Serialize};

use super::lancamento::Lancamento;

/// Corpo do POST de criação/edição da ordem de serviço
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalvarOrdemRequest {
    pub servicos: Vec<Lancamento>,
    /// Texto do roteiro exatamente como exibido no preview
    pub roteiro: String,
}

/// Resposta do servidor ao salvamento
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SalvarOrdemResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Corpo do POST de tradução do roteiro
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraducaoRequest {
    pub text: String,
    pub target_lang: String,
}

/// Resposta do serviço de tradução
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TraducaoResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub translated_text: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
