pub mod catalogo;
pub mod classificacao;

pub use catalogo::{Categoria, ServicoInfo, ServicoResumo, TipoMeia, TransferOpcao};
pub use classificacao::{classificar_idade, faixas_precos, FaixaEtaria, FaixaPreco};
