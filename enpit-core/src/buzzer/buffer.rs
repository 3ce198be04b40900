use enpit_common::Note;

/// 旋律缓冲区容量
pub const BUFFER_SIZE: usize = 32;

/// 定长音符缓冲区及读游标
///
/// `cursor == len()` 表示已经读完。
#[derive(Debug, Clone)]
pub struct NoteBuffer<const N: usize = BUFFER_SIZE> {
    notes: heapless::Vec<Note, N>,
    cursor: usize,
}

/// 写入的音符数超过容量
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overflow {
    pub requested: usize,
    pub capacity: usize,
}

impl<const N: usize> NoteBuffer<N> {
    pub const fn new() -> Self {
        Self {
            notes: heapless::Vec::new(),
            cursor: 0,
        }
    }

    /// 整体替换内容并把游标归零；超出容量时原内容保持不变
    pub fn write(&mut self, notes: &[Note]) -> Result<(), Overflow> {
        self.notes = heapless::Vec::from_slice(notes).map_err(|_| Overflow {
            requested: notes.len(),
            capacity: N,
        })?;
        self.cursor = 0;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.notes.clear();
        self.cursor = 0;
    }

    /// 游标处的音符，不移动游标
    pub fn peek(&self) -> Option<Note> {
        self.notes.get(self.cursor).copied()
    }

    /// 读取游标处的音符并前移游标
    pub fn take_next(&mut self) -> Option<Note> {
        let note = self.peek()?;
        self.cursor += 1;
        Some(note)
    }

    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.notes.len()
    }

    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }
}

impl<const N: usize> Default for NoteBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
