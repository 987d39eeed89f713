//! Cópia de texto para a área de transferência
//!
//! Usa a Clipboard API via `web_sys`. A escrita é assíncrona; falhas
//! são silenciosas porque o navegador só as produz quando a página
//! perdeu o foco ou a permissão foi negada.

use wasm_bindgen_futures::{spawn_local, JsFuture};

async fn escrever(texto: String) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let clipboard = window.navigator().clipboard();
    JsFuture::from(clipboard.write_text(&texto)).await.is_ok()
}

/// Copia o texto e executa o callback quando a escrita é confirmada,
/// para feedback visual (toast, troca de rótulo de botão)
pub fn copy_to_clipboard_with_callback<F>(text: &str, on_success: F)
where
    F: FnOnce() + 'static,
{
    let texto = text.to_owned();
    spawn_local(async move {
        if escrever(texto).await {
            on_success();
        }
    });
}
