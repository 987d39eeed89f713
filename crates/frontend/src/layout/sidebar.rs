//! Sidebar de configurações
//!
//! Widget de navegação lateral do back-office: abre sobre um overlay no
//! mobile, colapsa para ícones no desktop, fecha com ESC e exibe um
//! relógio atualizado a cada segundo.

use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Debug, PartialEq)]
struct GrupoMenu {
    id: &'static str,
    label: &'static str,
    icone: &'static str,
    itens: Vec<(&'static str, &'static str)>, // (label, href)
}

fn grupos_menu() -> Vec<GrupoMenu> {
    vec![
        GrupoMenu {
            id: "empresa",
            label: "Empresa",
            icone: "bi-building",
            itens: vec![
                ("Dados da Empresa", "/configuracoes/empresa/"),
                ("Personalização", "/configuracoes/personalizacao/"),
            ],
        },
        GrupoMenu {
            id: "servicos",
            label: "Serviços",
            icone: "bi-briefcase",
            itens: vec![
                ("Categorias", "/servicos/categorias/"),
                ("Subcategorias", "/servicos/subcategorias/"),
                ("Ordens de Serviço", "/servicos/ordens/"),
            ],
        },
        GrupoMenu {
            id: "sistema",
            label: "Sistema",
            icone: "bi-gear",
            itens: vec![
                ("Usuários", "/usuarios/"),
                ("Auditoria", "/auditoria/"),
            ],
        },
    ]
}

fn hora_atual() -> String {
    let agora = js_sys::Date::new_0();
    format!(
        "{:02}:{:02}:{:02}",
        agora.get_hours(),
        agora.get_minutes(),
        agora.get_seconds()
    )
}

#[component]
pub fn SettingsSidebar() -> impl IntoView {
    let aberta = RwSignal::new(false);
    let colapsada = RwSignal::new(true);
    let hora = RwSignal::new(hora_atual());

    // Relógio do rodapé da sidebar
    spawn_local(async move {
        loop {
            TimeoutFuture::new(1000).await;
            hora.set(hora_atual());
        }
    });

    // ESC fecha a sidebar no mobile
    let _ = window_event_listener(ev::keydown, move |evento| {
        if evento.key() == "Escape" && aberta.get_untracked() {
            aberta.set(false);
        }
    });

    let grupos = grupos_menu();

    view! {
        <button
            class="btn btn-outline-secondary sidebar-mobile-toggle d-lg-none"
            on:click=move |_| aberta.update(|a| *a = !*a)
        >
            <i class="bi bi-list"></i>
        </button>

        <Show when=move || aberta.get()>
            <div class="sidebar-overlay" on:click=move |_| aberta.set(false)></div>
        </Show>

        <aside class=move || {
            let mut classes = String::from("settings-sidebar");
            if aberta.get() {
                classes.push_str(" open");
            }
            if colapsada.get() {
                classes.push_str(" collapsed");
            }
            classes
        }>
            <div class="sidebar-header d-flex justify-content-between align-items-center">
                <span class="sidebar-title">"Configurações"</span>
                <button
                    class="btn btn-sm sidebar-collapse-toggle d-none d-lg-inline"
                    on:click=move |_| colapsada.update(|c| *c = !*c)
                >
                    <i class=move || {
                        if colapsada.get() {
                            "bi bi-chevron-right"
                        } else {
                            "bi bi-chevron-left"
                        }
                    }></i>
                </button>
                <button
                    class="btn btn-sm sidebar-toggle d-lg-none"
                    on:click=move |_| aberta.set(false)
                >
                    <i class="bi bi-x-lg"></i>
                </button>
            </div>

            <nav class="sidebar-nav">
                {grupos
                    .into_iter()
                    .map(|grupo| {
                        view! {
                            <div class="sidebar-group" id=grupo.id>
                                <div class="sidebar-group-label">
                                    <i class=format!("bi {} me-2", grupo.icone)></i>
                                    <span>{grupo.label}</span>
                                </div>
                                <ul class="list-unstyled">
                                    {grupo
                                        .itens
                                        .into_iter()
                                        .map(|(label, href)| {
                                            view! {
                                                <li>
                                                    <a class="sidebar-link" href=href>
                                                        {label}
                                                    </a>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </nav>

            <div class="sidebar-footer text-muted small">
                <i class="bi bi-clock me-1"></i>
                <span id="timeDisplay">{move || hora.get()}</span>
            </div>
        </aside>
    }
}
