pub mod draft;
pub mod lancamento;
pub mod requests;
pub mod resumo;
pub mod roteiro;

pub use draft::OrdemDraft;
pub use lancamento::{
    montar_lancamento, ErroFormulario, FormularioServico, Lancamento, TipoMeiaSelecionado,
    TransferEscolhido, TransferLancado,
};
pub use requests::{SalvarOrdemRequest, SalvarOrdemResponse, TraducaoRequest, TraducaoResponse};
pub use resumo::{LinhaResumo, ResumoOrdem};
pub use roteiro::{gerar_roteiro, ROTEIRO_VAZIO};
