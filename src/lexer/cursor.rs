use std::str::Chars;

#[derive(Clone)]
pub struct Cursor<'a> {
    chars: Chars<'a>,
    ln: u64,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        let chars = s.chars();
        Self { chars, ln: 1 }
    }

    pub fn peek(&self) -> Option<char> {
        self.chars.clone().next()
    }

    /// Consumes one char, counting it if it ends a line.
    pub fn take(&mut self) -> Option<char> {
        let c = self.chars.next();
        if c == Some('\n') {
            self.ln += 1;
        }
        c
    }

    #[inline]
    pub fn skip_if(&mut self, p: impl FnOnce(char) -> bool) -> bool {
        let skipped = self.peek().filter(|&c| p(c)).is_some();
        if skipped {
            self.take();
        }
        skipped
    }

    pub fn skip_whitespaces(&mut self) {
        while self.skip_if(|c| matches!(c, ' ' | '\t' | '\n' | '\r')) {}
    }

    pub fn take_while(&mut self, p: impl Fn(char) -> bool) -> String {
        let mut buf = String::new();
        while let Some(c) = self.peek().filter(|&c| p(c)) {
            buf.push(c);
            self.take();
        }
        buf
    }

    pub fn get_line(&self) -> u64 {
        self.ln
    }
}
