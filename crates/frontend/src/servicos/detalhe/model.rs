//! Chamada ao endpoint de tradução do roteiro

use contracts::domain::ordem::{TraducaoRequest, TraducaoResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Traduz o roteiro para o idioma alvo.
///
/// Respostas não-JSON (páginas de erro do servidor) viram uma mensagem
/// de erro interno, não um pânico de parse.
pub async fn traduzir(
    url: &str,
    csrf_token: &str,
    texto: &str,
    idioma: &str,
) -> Result<String, String> {
    let request = TraducaoRequest {
        text: texto.to_string(),
        target_lang: idioma.to_string(),
    };

    let response = Request::post(&api_url(url))
        .header("X-CSRFToken", csrf_token)
        .json(&request)
        .map_err(|e| format!("Erro de comunicação: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Erro de comunicação: {}", e))?;

    let corpo = response
        .json::<TraducaoResponse>()
        .await
        .map_err(|_| "O servidor retornou um erro interno".to_string())?;

    match corpo.translated_text {
        Some(texto) if corpo.success => Ok(texto),
        _ => Err(corpo
            .error
            .unwrap_or_else(|| "Erro desconhecido na tradução".to_string())),
    }
}
