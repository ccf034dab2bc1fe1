//! Brace-delimited templates shared by the line prefix (`{TIME} {SEVERITY} ...`)
//! and the output file name pattern (`{EXE}_{TIME}.log`).

/// Closed set of known substitution tokens. Unknown `{NAMES}` pass through as literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Time,
    UserHeader,
    Severity,
    FileLine,
    FileName,
    Thread,
    Exe,
}

impl Placeholder {
    /// Name between the braces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Time => "TIME",
            Self::UserHeader => "USER_HEADER",
            Self::Severity => "SEVERITY",
            Self::FileLine => "FILELINE",
            Self::FileName => "FILENAME",
            Self::Thread => "THREAD",
            Self::Exe => "EXE",
        }
    }

    /// Full token including braces, e.g. `{USER_HEADER}`.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Time => "{TIME}",
            Self::UserHeader => "{USER_HEADER}",
            Self::Severity => "{SEVERITY}",
            Self::FileLine => "{FILELINE}",
            Self::FileName => "{FILENAME}",
            Self::Thread => "{THREAD}",
            Self::Exe => "{EXE}",
        }
    }

    pub const ALL: &'static [Self] = &[
        Self::Time,
        Self::UserHeader,
        Self::Severity,
        Self::FileLine,
        Self::FileName,
        Self::Thread,
        Self::Exe,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatSegment {
    /// Whitespace, separators, and unknown `{names}`.
    Literal(String),
    Placeholder(Placeholder),
}

/// Pre-parsed template: parse once, render many.
#[derive(Debug, Clone)]
pub struct FormatTemplate {
    segments: Vec<FormatSegment>,
}

impl FormatTemplate {
    /// Turns `"{TIME} {SEVERITY}"` into a segment list.
    #[must_use]
    pub fn parse(template: &str) -> Self {
        let mut segments = Vec::new();
        let mut current = String::new();
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            let Some(close) = rest[open..].find('}').map(|i| open + i) else {
                break;
            };
            current.push_str(&rest[..open]);
            let name = &rest[open + 1..close];

            match Self::match_placeholder(name) {
                Some(ph) => {
                    if !current.is_empty() {
                        segments.push(FormatSegment::Literal(std::mem::take(&mut current)));
                    }
                    segments.push(FormatSegment::Placeholder(ph));
                }
                None => current.push_str(&rest[open..=close]),
            }
            rest = &rest[close + 1..];
        }
        current.push_str(rest);

        if !current.is_empty() {
            segments.push(FormatSegment::Literal(current));
        }

        Self { segments }
    }

    fn match_placeholder(name: &str) -> Option<Placeholder> {
        Placeholder::ALL.iter().copied().find(|ph| ph.as_str() == name)
    }

    #[must_use]
    pub fn segments(&self) -> &[FormatSegment] {
        &self.segments
    }

    /// Substitutes each placeholder with what `value` returns for it. `None`
    /// keeps the token verbatim so a later pass can fill it in.
    #[must_use]
    pub fn render_with<F>(&self, mut value: F) -> String
    where
        F: FnMut(Placeholder) -> Option<String>,
    {
        let mut result = String::new();

        for segment in &self.segments {
            match segment {
                FormatSegment::Literal(s) => result.push_str(s),
                FormatSegment::Placeholder(ph) => match value(*ph) {
                    Some(v) => result.push_str(&v),
                    None => result.push_str(ph.token()),
                },
            }
        }

        result
    }
}
