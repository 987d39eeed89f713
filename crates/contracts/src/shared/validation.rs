//! Validação de documentos e campos brasileiros
//!
//! Algoritmos de dígito verificador de CNPJ e CPF, além das checagens
//! simples de CEP e e-mail usadas nos formulários de configuração.

fn somente_digitos(valor: &str) -> Vec<u32> {
    valor.chars().filter_map(|c| c.to_digit(10)).collect()
}

fn todos_iguais(digitos: &[u32]) -> bool {
    digitos.windows(2).all(|par| par[0] == par[1])
}

/// Valida um CNPJ pelo algoritmo oficial de dígitos verificadores.
///
/// Aceita o valor com ou sem máscara; sequências de um único dígito
/// repetido são rejeitadas.
pub fn validar_cnpj(cnpj: &str) -> bool {
    let digitos = somente_digitos(cnpj);
    if digitos.len() != 14 || todos_iguais(&digitos) {
        return false;
    }

    let dv = |quantidade: usize, peso_inicial: u32| -> u32 {
        let mut soma = 0;
        let mut peso = peso_inicial;
        for digito in digitos.iter().take(quantidade) {
            soma += digito * peso;
            peso = if peso == 2 { 9 } else { peso - 1 };
        }
        let resto = soma % 11;
        if resto < 2 {
            0
        } else {
            11 - resto
        }
    };

    digitos[12] == dv(12, 5) && digitos[13] == dv(13, 6)
}

/// Valida um CPF pelo algoritmo oficial de dígitos verificadores.
pub fn validar_cpf(cpf: &str) -> bool {
    let digitos = somente_digitos(cpf);
    if digitos.len() != 11 || todos_iguais(&digitos) {
        return false;
    }

    let dv = |quantidade: usize, peso_inicial: u32| -> u32 {
        let soma: u32 = digitos
            .iter()
            .take(quantidade)
            .enumerate()
            .map(|(i, d)| d * (peso_inicial - i as u32))
            .sum();
        let resto = soma % 11;
        if resto < 2 {
            0
        } else {
            11 - resto
        }
    };

    digitos[9] == dv(9, 10) && digitos[10] == dv(10, 11)
}

/// CEP válido: exatamente 8 dígitos depois de remover a máscara
pub fn validar_cep(cep: &str) -> bool {
    somente_digitos(cep).len() == 8
}

/// Checagem de forma de e-mail: uma arroba separando partes não vazias,
/// com um ponto no domínio e nenhum espaço.
pub fn validar_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, dominio)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || dominio.contains('@') {
        return false;
    }
    match dominio.rsplit_once('.') {
        Some((nome, tld)) => !nome.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cnpj_valido_e_invalido() {
        assert!(validar_cnpj("11.222.333/0001-81"));
        assert!(validar_cnpj("11222333000181"));
        assert!(!validar_cnpj("11.222.333/0001-80"));
        assert!(!validar_cnpj("11111111111111"));
        assert!(!validar_cnpj("123"));
    }

    #[test]
    fn cpf_valido_e_invalido() {
        assert!(validar_cpf("529.982.247-25"));
        assert!(validar_cpf("52998224725"));
        assert!(!validar_cpf("529.982.247-24"));
        assert!(!validar_cpf("111.111.111-11"));
        assert!(!validar_cpf(""));
    }

    #[test]
    fn cep() {
        assert!(validar_cep("88010-000"));
        assert!(validar_cep("88010000"));
        assert!(!validar_cep("8801000"));
        assert!(!validar_cep(""));
    }

    #[test]
    fn email() {
        assert!(validar_email("contato@agencia.com.br"));
        assert!(!validar_email("sem-arroba.com"));
        assert!(!validar_email("@dominio.com"));
        assert!(!validar_email("a b@dominio.com"));
        assert!(!validar_email("nome@dominio"));
    }
}
