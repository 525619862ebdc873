// src/console/prompt.rs
// Leitura de dados do terminal. Entradas inválidas repetem a pergunta.
use super::Console;
use crate::error::{AppError, AppResult};
use chrono::{NaiveDate, NaiveTime};
use std::io::{self, BufRead, Write};

impl<R: BufRead, W: Write> Console<R, W> {
    /// Lê uma linha (sem o '\n'). Fim da entrada vira `UnexpectedEof`.
    pub(crate) fn read_line(&mut self, label: &str) -> AppResult<String> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "entrada terminada",
            )));
        }
        Ok(line.trim().to_string())
    }

    pub(crate) fn read_non_empty(&mut self, label: &str) -> AppResult<String> {
        loop {
            let value = self.read_line(&format!("{}: ", label))?;
            if !value.is_empty() {
                return Ok(value);
            }
            writeln!(self.out, "O campo não pode ser vazio.")?;
        }
    }

    pub(crate) fn read_u32(&mut self, label: &str) -> AppResult<u32> {
        loop {
            match self.read_line(&format!("{}: ", label))?.parse::<u32>() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.out, "Digite um número inteiro válido e não negativo.")?,
            }
        }
    }

    /// Nota entre 0 e 10 (aceita vírgula decimal).
    pub(crate) fn read_grade(&mut self, label: &str) -> AppResult<f64> {
        loop {
            let raw = self.read_line(&format!("{}: ", label))?.replace(',', ".");
            match raw.parse::<f64>() {
                Ok(grade) if crate::models::exam::is_valid_grade(grade) => return Ok(grade),
                _ => writeln!(self.out, "Nota inválida. Digite um valor entre 0 e 10.")?,
            }
        }
    }

    pub(crate) fn read_date(&mut self) -> AppResult<NaiveDate> {
        loop {
            let raw = self.read_line("Digite a data (YYYY-MM-DD): ")?;
            match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
                Ok(date) => return Ok(date),
                Err(_) => writeln!(self.out, "Formato de data inválido. Tente novamente.")?,
            }
        }
    }

    pub(crate) fn read_time(&mut self) -> AppResult<NaiveTime> {
        loop {
            let raw = self.read_line("Horário (HH:MM): ")?;
            match NaiveTime::parse_from_str(&raw, "%H:%M") {
                Ok(time) => return Ok(time),
                Err(_) => writeln!(self.out, "Formato inválido. Use HH:MM, por exemplo 14:30.")?,
            }
        }
    }

    /// Pergunta s/n.
    pub(crate) fn confirm(&mut self, label: &str) -> AppResult<bool> {
        loop {
            match self.read_line(&format!("{} (s/n)? ", label))?.to_lowercase().as_str() {
                "s" => return Ok(true),
                "n" => return Ok(false),
                _ => writeln!(self.out, "    Inválido.")?,
            }
        }
    }

    /// Mostra uma lista numerada e devolve o índice escolhido.
    /// `None` quando a lista está vazia ou o utilizador escolhe "0. Voltar".
    pub(crate) fn select_index(&mut self, title: &str, options: &[String]) -> AppResult<Option<usize>> {
        if options.is_empty() {
            writeln!(self.out, "\nNenhum item disponível em '{}'.", title)?;
            return Ok(None);
        }

        writeln!(self.out, "\n{}:", title)?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.out, "{}. {}", i + 1, option)?;
        }
        writeln!(self.out, "0. Voltar")?;

        loop {
            match self.read_line("\nDigite o número da opção: ")?.parse::<usize>() {
                Ok(0) => return Ok(None),
                Ok(n) if n <= options.len() => return Ok(Some(n - 1)),
                Ok(_) => writeln!(self.out, "Opção inválida, tente novamente.")?,
                Err(_) => writeln!(self.out, "Entrada inválida, digite um número.")?,
            }
        }
    }

    /// Seleção múltipla no formato "1,3,5". Devolve índices sem repetidos.
    /// Linha vazia ou "0" cancela e devolve uma lista vazia.
    pub(crate) fn select_many(&mut self, title: &str, options: &[String]) -> AppResult<Vec<usize>> {
        if options.is_empty() {
            writeln!(self.out, "Nenhum item disponível em '{}'.", title)?;
            return Ok(Vec::new());
        }

        writeln!(self.out, "\n{}:", title)?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.out, "{}. {}", i + 1, option)?;
        }
        writeln!(self.out, "Digite os números separados por vírgula (ex: 1,3,5), ou 0 para voltar:")?;

        loop {
            let raw = self.read_line("Seleção: ")?;
            if raw.is_empty() || raw == "0" {
                return Ok(Vec::new());
            }
            let parsed: Result<Vec<usize>, _> = raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::parse::<usize>)
                .collect();

            match parsed {
                Ok(numbers) if !numbers.is_empty() => {
                    if numbers.iter().all(|&n| (1..=options.len()).contains(&n)) {
                        let mut indices: Vec<usize> = Vec::new();
                        for n in numbers {
                            if !indices.contains(&(n - 1)) {
                                indices.push(n - 1);
                            }
                        }
                        return Ok(indices);
                    }
                    writeln!(self.out, "Algum número está fora da lista. Tente novamente.")?;
                }
                _ => writeln!(self.out, "Entrada inválida. Use números separados por vírgula.")?,
            }
        }
    }
}
