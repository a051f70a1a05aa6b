//! The flat token stream.
//!
//! Parsing produces an ordered `Vec<Token>` with no parent/child links.
//! Structure is expressed purely through [`Nesting`]: every `Open` token is
//! eventually followed by its matching `Close`, and the renderer walks the
//! list once, front to back.

use std::fmt;

/// Whether a token opens, closes, or stands alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nesting {
    /// Opens an element (+1)
    Open,
    /// Self-contained element (0)
    SelfClosing,
    /// Closes an element (-1)
    Close,
}

impl Nesting {
    /// The signed level delta of this nesting.
    pub fn delta(self) -> i8 {
        match self {
            Nesting::Open => 1,
            Nesting::SelfClosing => 0,
            Nesting::Close => -1,
        }
    }
}

/// Table cell alignment from the delimiter row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Align {
    /// `:---`
    Left,
    /// `:---:`
    Center,
    /// `---:`
    Right,
}

impl Align {
    /// The value used for the HTML `align` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a token represents, with the payload that kind needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    // === Block-level ===
    HeadingOpen {
        level: u8,
        /// Slug id (prefix included), when header ids are enabled
        id: Option<String>,
    },
    HeadingClose {
        level: u8,
    },
    ParagraphOpen,
    ParagraphClose,
    /// Fenced code block; `lang` is empty when none was given
    Fence {
        lang: String,
        content: String,
    },
    Hr,
    BlockquoteOpen,
    BlockquoteClose,
    BulletListOpen,
    BulletListClose,
    OrderedListOpen,
    OrderedListClose,
    ListItemOpen {
        /// `Some(checked)` for task list items
        task: Option<bool>,
    },
    ListItemClose,
    TableOpen,
    TableClose,
    TheadOpen,
    TheadClose,
    TbodyOpen,
    TbodyClose,
    TrOpen,
    TrClose,
    ThOpen {
        align: Option<Align>,
    },
    ThClose,
    TdOpen {
        align: Option<Align>,
    },
    TdClose,

    // === Inline ===
    Text(String),
    CodeInline(String),
    StrongOpen,
    StrongClose,
    EmOpen,
    EmClose,
    DelOpen,
    DelClose,
    LinkOpen {
        href: String,
        title: Option<String>,
    },
    LinkClose,
    Image {
        src: String,
        alt: String,
        title: Option<String>,
    },
    Break,
}

impl TokenKind {
    /// Nesting direction of this kind.
    pub fn nesting(&self) -> Nesting {
        use TokenKind::*;
        match self {
            HeadingOpen { .. } | ParagraphOpen | BlockquoteOpen | BulletListOpen
            | OrderedListOpen | ListItemOpen { .. } | TableOpen | TheadOpen | TbodyOpen
            | TrOpen | ThOpen { .. } | TdOpen { .. } | StrongOpen | EmOpen | DelOpen
            | LinkOpen { .. } => Nesting::Open,

            HeadingClose { .. } | ParagraphClose | BlockquoteClose | BulletListClose
            | OrderedListClose | ListItemClose | TableClose | TheadClose | TbodyClose
            | TrClose | ThClose | TdClose | StrongClose | EmClose | DelClose | LinkClose => {
                Nesting::Close
            }

            Fence { .. } | Hr | Text(_) | CodeInline(_) | Image { .. } | Break => {
                Nesting::SelfClosing
            }
        }
    }

    /// HTML element name, if the kind maps to one.
    pub fn tag(&self) -> Option<&'static str> {
        use TokenKind::*;
        let tag = match self {
            HeadingOpen { level, .. } | HeadingClose { level } => heading_tag(*level),
            ParagraphOpen | ParagraphClose => "p",
            Fence { .. } | CodeInline(_) => "code",
            Hr => "hr",
            BlockquoteOpen | BlockquoteClose => "blockquote",
            BulletListOpen | BulletListClose => "ul",
            OrderedListOpen | OrderedListClose => "ol",
            ListItemOpen { .. } | ListItemClose => "li",
            TableOpen | TableClose => "table",
            TheadOpen | TheadClose => "thead",
            TbodyOpen | TbodyClose => "tbody",
            TrOpen | TrClose => "tr",
            ThOpen { .. } | ThClose => "th",
            TdOpen { .. } | TdClose => "td",
            StrongOpen | StrongClose => "strong",
            EmOpen | EmClose => "em",
            DelOpen | DelClose => "del",
            LinkOpen { .. } | LinkClose => "a",
            Image { .. } => "img",
            Break => "br",
            Text(_) => return None,
        };
        Some(tag)
    }
}

fn heading_tag(level: u8) -> &'static str {
    match level {
        1 => "h1",
        2 => "h2",
        3 => "h3",
        4 => "h4",
        5 => "h5",
        _ => "h6",
    }
}

/// One entry of the flat token stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub nesting: Nesting,
    /// Depth at which the token was opened or closed
    pub level: usize,
}

impl Token {
    /// Create a token; nesting is derived from the kind.
    pub fn new(kind: TokenKind, level: usize) -> Self {
        let nesting = kind.nesting();
        Self {
            kind,
            nesting,
            level,
        }
    }

    /// HTML element name for this token.
    pub fn tag(&self) -> Option<&'static str> {
        self.kind.tag()
    }
}
