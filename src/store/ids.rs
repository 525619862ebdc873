// src/store/ids.rs

/// Sequência de IDs de um tipo de entidade: 1, 2, 3, ...
/// Nunca reutiliza um valor. Não é thread-safe (o núcleo corre numa só thread).
#[derive(Debug)]
pub struct IdAllocator {
    last: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self { last: 0 }
    }

    pub fn next(&mut self) -> u64 {
        self.last += 1;
        self.last
    }

    /// Último ID emitido (0 se nenhum).
    pub fn last(&self) -> u64 {
        self.last
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_one_and_strictly_increases() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.last(), 0);
        let issued: Vec<u64> = (0..5).map(|_| ids.next()).collect();
        assert_eq!(issued, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn sequences_are_independent() {
        let mut users = IdAllocator::new();
        let mut exams = IdAllocator::new();
        assert_eq!(users.next(), 1);
        assert_eq!(exams.next(), 1);
        assert_eq!(users.next(), 2);
        assert_eq!(exams.last(), 1);
    }
}
