//! C code emitter - generates C source code strings
//!
//! A small line-oriented builder: it owns indentation, braces and statement terminators so
//! templates only supply names and already-escaped values.

use std::fmt::Write;

/// A buffer for building C source code with proper indentation
#[derive(Debug)]
pub struct CEmitter {
    buffer: String,
    indent_level: usize,
    indent_str: &'static str,
}

impl Default for CEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl CEmitter {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            indent_level: 0,
            indent_str: "  ", // 2 spaces, as in the upytesthelper sources
        }
    }

    /// Get the generated code, without the newline ending the last line
    pub fn finish(mut self) -> String {
        if self.buffer.ends_with('\n') {
            self.buffer.pop();
        }
        self.buffer
    }

    /// Get current buffer as string slice
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Write a line with current indentation
    pub fn line(&mut self, s: &str) {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
    }

    /// Write formatted text as one indented line
    pub fn linef(&mut self, args: std::fmt::Arguments<'_>) {
        self.write_indent();
        let _ = self.buffer.write_fmt(args);
        self.buffer.push('\n');
    }

    /// Write indentation only
    pub fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent_str);
        }
    }

    /// Increase indent level
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indent level
    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// Write a block with braces
    pub fn block<F>(&mut self, header: &str, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.linef(format_args!("{header} {{"));
        self.indent();
        f(self);
        self.dedent();
        self.line("}");
    }

    /// Write a function definition
    pub fn function<F>(&mut self, return_type: &str, name: &str, params: &str, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.block(&format!("{return_type} {name}({params})"), f);
    }

    /// Write a brace initializer: `declaration = { ... };`
    pub fn initializer<F>(&mut self, declaration: &str, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.linef(format_args!("{declaration} = {{"));
        self.indent();
        f(self);
        self.dedent();
        self.line("};");
    }

    /// Write `static const char name[] = value;`
    ///
    /// `value` must already be a sequence of C string literals. Only its first line is indented.
    pub fn static_string(&mut self, name: &str, value: &str) {
        self.linef(format_args!("static const char {name}[] = {value};"));
    }

    /// Write a call statement
    pub fn call(&mut self, function: &str, args: &[&str]) {
        self.linef(format_args!("{function}({});", args.join(", ")));
    }

    /// Write a `{ a, b, ... },` aggregate entry
    pub fn aggregate_entry(&mut self, fields: &[&str]) {
        self.linef(format_args!("{{ {} }},", fields.join(", ")));
    }
}

/// Quote a string that needs no escaping (identifiers, test paths) as a C literal.
pub fn quoted(s: &str) -> String {
    format!("\"{s}\"")
}
