use contracts::shared::page_context::Pagina;
use leptos::prelude::*;

use crate::empresa::EmpresaForm;
use crate::layout::sidebar::SettingsSidebar;
use crate::servicos::detalhe::OrdemServicoDetalhe;
use crate::servicos::ordem::OrdemServicoForm;
use crate::servicos::subcategoria::SubcategoriaForm;
use crate::shared::page_context::page_data;
use crate::shared::toast::{ToastHost, ToastService};

#[component]
pub fn App() -> impl IntoView {
    // Serviço de notificações disponível para todas as páginas
    provide_context(ToastService::new());

    let pagina = page_data().pagina;

    view! {
        <ToastHost />
        // a barra lateral de configurações só existe na página da empresa
        {matches!(pagina, Pagina::Empresa).then(|| view! { <SettingsSidebar /> })}
        {match pagina {
            Pagina::OrdemServicoForm => view! { <OrdemServicoForm /> }.into_any(),
            Pagina::OrdemServicoDetalhe => view! { <OrdemServicoDetalhe /> }.into_any(),
            Pagina::Empresa => view! { <EmpresaForm /> }.into_any(),
            Pagina::SubcategoriaForm => view! { <SubcategoriaForm /> }.into_any(),
            Pagina::Desconhecida => {
                log::error!("página desconhecida no contexto; nada para montar");
                view! {
                    <div class="alert alert-warning m-3">
                        "Não foi possível carregar esta página. Recarregue e tente novamente."
                    </div>
                }
                .into_any()
            }
        }}
    }
}
