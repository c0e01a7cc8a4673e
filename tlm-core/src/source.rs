//! Последовательный источник байтов.

use std::io::{BufReader, ErrorKind, Read};

use tlm_types::TlmResult;

/// Читатель потока строго вперёд с абсолютным смещением.
///
/// При исчерпании потока примитив [`fill`](ByteSource::fill) возвращает
/// частичное количество байтов (возможно 0) вместо ошибки: усечённый
/// хвост файла — штатное завершение, а не сбой.
pub struct ByteSource<R: Read> {
    reader: BufReader<R>,
    position: u64,
}

impl<R: Read> ByteSource<R> {
    pub fn new(inner: R) -> Self {
        Self {
            reader: BufReader::new(inner),
            position: 0,
        }
    }

    /// Текущее смещение: байты, потреблённые с начала потока.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Заполняет `buf` целиком либо до конца потока.
    ///
    /// Возвращает количество реально прочитанных байтов; курсор
    /// сдвигается ровно на него. Ошибкой считается только сбой I/O.
    pub fn fill(
        &mut self,
        buf: &mut [u8],
    ) -> TlmResult<usize> {
        let mut filled = 0;

        while filled < buf.len() {
            match self.reader.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }

        self.position += filled as u64;

        Ok(filled)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_fill_exact() {
        let mut src = ByteSource::new(Cursor::new(vec![1u8, 2, 3, 4]));
        let mut buf = [0u8; 4];

        assert_eq!(src.fill(&mut buf).unwrap(), 4);
        assert_eq!(buf, [1, 2, 3, 4]);
        assert_eq!(src.position(), 4);
    }

    #[test]
    fn test_fill_partial_at_eof() {
        let mut src = ByteSource::new(Cursor::new(vec![1u8, 2]));
        let mut buf = [0u8; 6];

        assert_eq!(src.fill(&mut buf).unwrap(), 2);
        assert_eq!(src.position(), 2);

        // Повторный вызов на исчерпанном потоке — 0, не ошибка
        assert_eq!(src.fill(&mut buf).unwrap(), 0);
        assert_eq!(src.position(), 2);
    }

    #[test]
    fn test_fill_empty_stream() {
        let mut src = ByteSource::new(Cursor::new(Vec::<u8>::new()));
        let mut buf = [0u8; 6];

        assert_eq!(src.fill(&mut buf).unwrap(), 0);
        assert_eq!(src.position(), 0);
    }

    #[test]
    fn test_position_advances_per_call() {
        let mut src = ByteSource::new(Cursor::new(vec![0u8; 56]));
        let mut pre = [0u8; 6];
        let mut payload = [0u8; 14];

        src.fill(&mut pre).unwrap();
        assert_eq!(src.position(), 6);
        src.fill(&mut payload).unwrap();
        assert_eq!(src.position(), 20);
    }
}
