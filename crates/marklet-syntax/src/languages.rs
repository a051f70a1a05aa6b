//! Fence language names.
//!
//! Fence info strings are usually short names (`py`, `sh`, `c++`) while
//! syntect looks syntaxes up by their display name. The table below maps
//! lowercase fence names to syntect names from the default syntax set.

use std::collections::HashMap;
use std::sync::LazyLock;

/// `(fence name, syntect syntax name)` pairs, fence names lowercase.
pub const FENCE_NAMES: &[(&str, &str)] = &[
    ("bash", "Bourne Again Shell (bash)"),
    ("sh", "Bourne Again Shell (bash)"),
    ("shell", "Bourne Again Shell (bash)"),
    ("zsh", "Bourne Again Shell (bash)"),
    ("console", "Bourne Again Shell (bash)"),
    ("bat", "Batch File"),
    ("cmd", "Batch File"),
    ("c", "C"),
    ("h", "C"),
    ("cpp", "C++"),
    ("c++", "C++"),
    ("cc", "C++"),
    ("hpp", "C++"),
    ("cs", "C#"),
    ("csharp", "C#"),
    ("css", "CSS"),
    ("clj", "Clojure"),
    ("clojure", "Clojure"),
    ("d", "D"),
    ("diff", "Diff"),
    ("patch", "Diff"),
    ("erl", "Erlang"),
    ("erlang", "Erlang"),
    ("go", "Go"),
    ("golang", "Go"),
    ("dot", "Graphviz (DOT)"),
    ("graphviz", "Graphviz (DOT)"),
    ("groovy", "Groovy"),
    ("hs", "Haskell"),
    ("haskell", "Haskell"),
    ("html", "HTML"),
    ("htm", "HTML"),
    ("java", "Java"),
    ("js", "JavaScript"),
    ("javascript", "JavaScript"),
    ("jsx", "JavaScript"),
    ("mjs", "JavaScript"),
    ("node", "JavaScript"),
    ("json", "JSON"),
    ("tex", "LaTeX"),
    ("latex", "LaTeX"),
    ("lisp", "Lisp"),
    ("lua", "Lua"),
    ("make", "Makefile"),
    ("makefile", "Makefile"),
    ("md", "Markdown"),
    ("markdown", "Markdown"),
    ("objc", "Objective-C"),
    ("ocaml", "OCaml"),
    ("ml", "OCaml"),
    ("pas", "Pascal"),
    ("pascal", "Pascal"),
    ("perl", "Perl"),
    ("pl", "Perl"),
    ("php", "PHP"),
    ("py", "Python"),
    ("py3", "Python"),
    ("python", "Python"),
    ("python3", "Python"),
    ("r", "R"),
    ("rb", "Ruby"),
    ("ruby", "Ruby"),
    ("rs", "Rust"),
    ("rust", "Rust"),
    ("scala", "Scala"),
    ("sql", "SQL"),
    ("txt", "Plain Text"),
    ("text", "Plain Text"),
    ("plain", "Plain Text"),
    ("xml", "XML"),
    ("svg", "XML"),
    ("yml", "YAML"),
    ("yaml", "YAML"),
];

static FENCE_INDEX: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| FENCE_NAMES.iter().copied().collect());

/// Syntect syntax name for a fence language, case-insensitive.
///
/// # Example
/// ```
/// use marklet_syntax::syntax_name;
///
/// assert_eq!(syntax_name("py"), Some("Python"));
/// assert_eq!(syntax_name("C++"), Some("C++"));
/// assert_eq!(syntax_name("brainfuck"), None);
/// ```
pub fn syntax_name(lang: &str) -> Option<&'static str> {
    FENCE_INDEX.get(lang.to_lowercase().as_str()).copied()
}
