//! Chamadas aos endpoints de catálogo e de salvamento da ordem

use contracts::domain::ordem::{SalvarOrdemRequest, SalvarOrdemResponse};
use contracts::domain::servico::{ServicoInfo, ServicoResumo, TipoMeia};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Lista os serviços de uma categoria
pub async fn buscar_servicos(url: &str, categoria_id: &str) -> Result<Vec<ServicoResumo>, String> {
    let url = format!("{}?categoria_id={}", api_url(url), categoria_id);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Erro ao carregar serviços: {}", e))?;

    if !response.ok() {
        return Err(format!("Erro ao carregar serviços: HTTP {}", response.status()));
    }

    response
        .json::<Vec<ServicoResumo>>()
        .await
        .map_err(|e| format!("Erro ao carregar serviços: {}", e))
}

/// Busca as regras de preço e elegibilidade de um serviço
pub async fn buscar_servico_info(url: &str, servico_id: &str) -> Result<ServicoInfo, String> {
    let url = format!("{}?servico_id={}", api_url(url), servico_id);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Erro ao carregar informações do serviço: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Erro ao carregar informações do serviço: HTTP {}",
            response.status()
        ));
    }

    response
        .json::<ServicoInfo>()
        .await
        .map_err(|e| format!("Erro ao carregar informações do serviço: {}", e))
}

/// Lista os tipos de meia entrada disponíveis
pub async fn buscar_tipos_meia(url: &str) -> Result<Vec<TipoMeia>, String> {
    let response = Request::get(&api_url(url))
        .send()
        .await
        .map_err(|e| format!("Erro ao carregar tipos de meia: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Erro ao carregar tipos de meia: HTTP {}",
            response.status()
        ));
    }

    response
        .json::<Vec<TipoMeia>>()
        .await
        .map_err(|e| format!("Erro ao carregar tipos de meia: {}", e))
}

/// Envia a ordem completa para criação ou edição.
///
/// Em caso de falha tenta extrair a mensagem de erro do corpo JSON;
/// sem corpo parseável, devolve uma mensagem genérica.
pub async fn salvar_ordem(
    url: &str,
    csrf_token: &str,
    request: &SalvarOrdemRequest,
) -> Result<(), String> {
    let response = Request::post(&api_url(url))
        .header("X-CSRFToken", csrf_token)
        .json(request)
        .map_err(|e| format!("Erro ao serializar a ordem: {}", e))?
        .send()
        .await
        .map_err(|_| "Erro ao salvar ordem de serviço".to_string())?;

    if response.ok() {
        return Ok(());
    }

    match response.json::<SalvarOrdemResponse>().await {
        Ok(corpo) => Err(format!(
            "Erro ao salvar: {}",
            corpo.error.unwrap_or_else(|| "Erro desconhecido".to_string())
        )),
        Err(_) => Err("Erro ao salvar ordem de serviço".to_string()),
    }
}
