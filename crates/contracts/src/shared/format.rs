//! Formatação de valores brasileiros (moeda, datas, documentos)

use chrono::NaiveDate;

/// Formata um valor em reais com vírgula decimal: `R$ 1234,56`.
///
/// Separador de milhar não é usado, seguindo a apresentação do resumo
/// de totais da ordem de serviço.
pub fn formatar_moeda(valor: f64) -> String {
    format!("R$ {}", format!("{:.2}", valor).replace('.', ","))
}

/// Formata uma data no padrão brasileiro: `dd/mm/aaaa`
pub fn formatar_data_br(data: NaiveDate) -> String {
    data.format("%d/%m/%Y").to_string()
}

/// Converte uma data ISO (`aaaa-mm-dd`) em `dd/mm/aaaa`.
///
/// Entradas fora do formato esperado são devolvidas como estão.
pub fn formatar_data_iso_br(data: &str) -> String {
    let partes: Vec<&str> = data.split('-').collect();
    if partes.len() == 3 {
        return format!("{}/{}/{}", partes[2], partes[1], partes[0]);
    }
    data.to_string()
}

fn somente_digitos(valor: &str) -> String {
    valor.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Aplica a máscara de CNPJ: `00.000.000/0000-00`
pub fn formatar_cnpj(valor: &str) -> String {
    let d = somente_digitos(valor);
    if d.len() != 14 {
        return d;
    }
    format!(
        "{}.{}.{}/{}-{}",
        &d[0..2],
        &d[2..5],
        &d[5..8],
        &d[8..12],
        &d[12..14]
    )
}

/// Aplica a máscara de CPF: `000.000.000-00`
pub fn formatar_cpf(valor: &str) -> String {
    let d = somente_digitos(valor);
    if d.len() != 11 {
        return d;
    }
    format!("{}.{}.{}-{}", &d[0..3], &d[3..6], &d[6..9], &d[9..11])
}

/// Aplica a máscara de CEP: `00000-000`
pub fn formatar_cep(valor: &str) -> String {
    let d = somente_digitos(valor);
    if d.len() != 8 {
        return d;
    }
    format!("{}-{}", &d[0..5], &d[5..8])
}

/// Aplica a máscara de telefone fixo ou celular:
/// `(00) 0000-0000` com 10 dígitos, `(00) 00000-0000` com 11.
pub fn formatar_telefone(valor: &str) -> String {
    let d = somente_digitos(valor);
    match d.len() {
        10 => format!("({}) {}-{}", &d[0..2], &d[2..6], &d[6..10]),
        11 => format!("({}) {}-{}", &d[0..2], &d[2..7], &d[7..11]),
        _ => d,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moeda_com_virgula() {
        assert_eq!(formatar_moeda(300.0), "R$ 300,00");
        assert_eq!(formatar_moeda(0.0), "R$ 0,00");
        assert_eq!(formatar_moeda(1234.5), "R$ 1234,50");
        assert_eq!(formatar_moeda(19.99), "R$ 19,99");
    }

    #[test]
    fn data_brasileira() {
        let data = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        assert_eq!(formatar_data_br(data), "10/03/2025");
        assert_eq!(formatar_data_iso_br("2025-01-05"), "05/01/2025");
        assert_eq!(formatar_data_iso_br("invalida"), "invalida");
    }

    #[test]
    fn mascaras_de_documentos() {
        assert_eq!(formatar_cnpj("11222333000181"), "11.222.333/0001-81");
        assert_eq!(formatar_cpf("52998224725"), "529.982.247-25");
        assert_eq!(formatar_cep("88010000"), "88010-000");
    }

    #[test]
    fn mascara_de_telefone() {
        assert_eq!(formatar_telefone("4832221111"), "(48) 3222-1111");
        assert_eq!(formatar_telefone("48999887766"), "(48) 99988-7766");
        // comprimento inesperado fica só com os dígitos
        assert_eq!(formatar_telefone("123"), "123");
    }
}
