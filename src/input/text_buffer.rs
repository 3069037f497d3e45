//! Line editing for the password and base-word fields.
//!
//! Both fields share [`LineBuffer`]; they differ only in the backing store.
//! The password field keeps its text in a [`Zeroizing`] string so it is
//! wiped when cleared or dropped. Cursor positions count chars, not bytes.

use crossterm::event::{KeyCode, KeyModifiers};
use zeroize::{Zeroize, Zeroizing};

/// A single editing command, decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    Insert(char),
    Backspace,
    Delete,
    DeleteWord,
    KillToStart,
    Left,
    Right,
    Home,
    End,
}

impl Edit {
    /// Readline-style bindings. Keys with no editing meaning return `None`
    /// so the caller can route them elsewhere.
    pub fn from_key(code: KeyCode, mods: KeyModifiers) -> Option<Self> {
        let ctrl = mods.contains(KeyModifiers::CONTROL);
        let edit = match code {
            KeyCode::Backspace if ctrl || mods.contains(KeyModifiers::ALT) => Edit::DeleteWord,
            KeyCode::Backspace => Edit::Backspace,
            KeyCode::Delete => Edit::Delete,
            KeyCode::Left => Edit::Left,
            KeyCode::Right => Edit::Right,
            KeyCode::Home => Edit::Home,
            KeyCode::End => Edit::End,
            KeyCode::Char('w') if ctrl => Edit::DeleteWord,
            KeyCode::Char('u') if ctrl => Edit::KillToStart,
            KeyCode::Char('a') if ctrl => Edit::Home,
            KeyCode::Char('e') if ctrl => Edit::End,
            KeyCode::Char(c) if mods.difference(KeyModifiers::SHIFT).is_empty() => Edit::Insert(c),
            _ => return None,
        };
        Some(edit)
    }
}

/// Read access shared by every editable field.
pub trait TextEditing {
    fn content(&self) -> &str;
    fn cursor(&self) -> usize;
    fn set_content(&mut self, content: &str);
    fn apply(&mut self, edit: Edit);

    fn is_blank(&self) -> bool {
        self.content().trim().is_empty()
    }
}

/// Applies the edit bound to `code`, returning false when the key is not an edit.
pub fn handle_text_key<T: TextEditing>(buf: &mut T, code: KeyCode, mods: KeyModifiers) -> bool {
    match Edit::from_key(code, mods) {
        Some(edit) => {
            buf.apply(edit);
            true
        }
        None => false,
    }
}

/// Backing store for a [`LineBuffer`].
pub trait Storage: Default {
    fn text(&self) -> &String;
    fn text_mut(&mut self) -> &mut String;
    fn wipe(&mut self);
}

impl Storage for String {
    fn text(&self) -> &String {
        self
    }

    fn text_mut(&mut self) -> &mut String {
        self
    }

    fn wipe(&mut self) {
        self.clear();
    }
}

impl Storage for Zeroizing<String> {
    fn text(&self) -> &String {
        self
    }

    fn text_mut(&mut self) -> &mut String {
        self
    }

    fn wipe(&mut self) {
        (**self).zeroize();
    }
}

#[derive(Debug, Clone, Default)]
pub struct LineBuffer<S> {
    store: S,
    cursor: usize,
}

pub type TextBuffer = LineBuffer<String>;
pub type SecureTextBuffer = LineBuffer<Zeroizing<String>>;

impl<S: Storage> LineBuffer<S> {
    pub fn new() -> Self {
        Self::default()
    }

    fn len(&self) -> usize {
        self.store.text().chars().count()
    }

    fn byte_at(&self, pos: usize) -> usize {
        let text = self.store.text();
        text.char_indices().nth(pos).map_or(text.len(), |(i, _)| i)
    }

    fn remove_range(&mut self, from: usize, to: usize) {
        let (start, end) = (self.byte_at(from), self.byte_at(to));
        self.store.text_mut().replace_range(start..end, "");
        self.cursor = from;
    }
}

impl<S: Storage> TextEditing for LineBuffer<S> {
    fn content(&self) -> &str {
        self.store.text()
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn set_content(&mut self, content: &str) {
        self.store.wipe();
        self.store.text_mut().push_str(content);
        self.cursor = self.len();
    }

    fn apply(&mut self, edit: Edit) {
        let len = self.len();
        match edit {
            Edit::Insert(c) => {
                let at = self.byte_at(self.cursor);
                self.store.text_mut().insert(at, c);
                self.cursor += 1;
            }
            Edit::Backspace if self.cursor > 0 => self.remove_range(self.cursor - 1, self.cursor),
            Edit::Delete if self.cursor < len => {
                let cursor = self.cursor;
                self.remove_range(cursor, cursor + 1);
            }
            Edit::DeleteWord => {
                let stop = word_start(self.store.text(), self.cursor);
                self.remove_range(stop, self.cursor);
            }
            Edit::KillToStart => self.remove_range(0, self.cursor),
            Edit::Left => self.cursor = self.cursor.saturating_sub(1),
            Edit::Right => self.cursor = (self.cursor + 1).min(len),
            Edit::Home => self.cursor = 0,
            Edit::End => self.cursor = len,
            Edit::Backspace | Edit::Delete => {}
        }
    }
}

#[derive(PartialEq)]
enum CharClass {
    Space,
    Word,
    Symbol,
}

fn class_of(c: char) -> CharClass {
    if c.is_whitespace() {
        CharClass::Space
    } else if c.is_alphanumeric() || c == '_' {
        CharClass::Word
    } else {
        CharClass::Symbol
    }
}

/// Char index where a backwards word delete from `from` stops: trailing
/// spaces go first, then one run of word chars, or a run of symbols plus
/// the word they trail.
fn word_start(text: &str, from: usize) -> usize {
    let classes: Vec<CharClass> = text.chars().take(from).map(class_of).collect();
    let mut pos = classes.len();
    let skip = |pos: &mut usize, class: CharClass| {
        while *pos > 0 && classes[*pos - 1] == class {
            *pos -= 1;
        }
    };

    skip(&mut pos, CharClass::Space);
    if pos > 0 && classes[pos - 1] == CharClass::Symbol {
        skip(&mut pos, CharClass::Symbol);
    }
    skip(&mut pos, CharClass::Word);
    pos
}
