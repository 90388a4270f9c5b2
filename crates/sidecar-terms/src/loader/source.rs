//! Rust source scanning.
//!
//! Finds a dependency's source directory (for example inside the Cargo
//! registry cache, `~/.cargo/registry/src/<index>/<name>-<version>`) and
//! reads the public names out of `src/**/*.rs`.
//!
//! Each file is parsed with tree-sitter's Rust grammar. Only items marked
//! plain `pub` count, along with the members of public types: `pub` fields,
//! enum variants, trait items, and the methods of `impl` blocks.

use std::path::PathBuf;

use semver::Version;
use tree_sitter::{Node, Parser};
use tree_sitter_rust::LANGUAGE;
use walkdir::WalkDir;

use crate::error::LoadError;
use crate::library::{Library, LibraryLoader, StaticLibrary, Symbol, SymbolKind};

/// Loads libraries by scanning their Rust sources.
#[derive(Debug, Clone, Default)]
pub struct SourceLoader {
    roots: Vec<PathBuf>,
}

impl SourceLoader {
    /// Creates a loader searching `roots` and their immediate subdirectories.
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    /// Finds the source directory for `name`.
    ///
    /// Accepts `<name>` and `<name>-<semver>` directories (with `-` and `_`
    /// treated alike) and picks the highest version; an unversioned match
    /// ranks below any versioned one.
    pub fn find_library_dir(&self, name: &str) -> Option<PathBuf> {
        let spellings = spellings(name);
        let mut best: Option<(Option<Version>, PathBuf)> = None;

        for dir in self.search_dirs() {
            let Ok(entries) = std::fs::read_dir(&dir) else {
                continue;
            };
            for entry in entries.flatten() {
                let path = entry.path();
                if !path.is_dir() {
                    continue;
                }
                let Some(dir_name) = path.file_name().and_then(|n| n.to_str()) else {
                    continue;
                };
                let Some(version) = match_dir_name(dir_name, &spellings) else {
                    continue;
                };
                let better = match &best {
                    Some((current, _)) => version > *current,
                    None => true,
                };
                if better {
                    best = Some((version, path));
                }
            }
        }

        best.map(|(_, path)| path)
    }

    fn search_dirs(&self) -> Vec<PathBuf> {
        let mut dirs = Vec::new();
        for root in &self.roots {
            dirs.push(root.clone());
            if let Ok(entries) = std::fs::read_dir(root) {
                let mut nested: Vec<PathBuf> = entries
                    .flatten()
                    .map(|entry| entry.path())
                    .filter(|path| path.is_dir())
                    .collect();
                nested.sort();
                dirs.extend(nested);
            }
        }
        dirs
    }
}

impl LibraryLoader for SourceLoader {
    fn label(&self) -> &'static str {
        "source"
    }

    fn load(&self, name: &str) -> Result<Box<dyn Library>, LoadError> {
        let dir = self
            .find_library_dir(name)
            .ok_or_else(|| LoadError::NotFound {
                name: name.to_string(),
            })?;
        let src = dir.join("src");
        let scan_root = if src.is_dir() { src } else { dir };

        let mut parser = rust_parser()?;
        let mut library = StaticLibrary::new(name);
        for entry in WalkDir::new(&scan_root)
            .sort_by_file_name()
            .into_iter()
            .flatten()
        {
            let path = entry.path();
            if !entry.file_type().is_file() || path.extension().is_none_or(|ext| ext != "rs") {
                continue;
            }
            match std::fs::read_to_string(path) {
                Ok(text) => {
                    if !scan_source(&mut parser, &text, &mut library) {
                        tracing::debug!(path = %path.display(), "no syntax tree for source file");
                    }
                }
                Err(error) => {
                    // One unreadable file only loses that file's names.
                    tracing::debug!(path = %path.display(), %error, "skipping source file");
                }
            }
        }

        Ok(Box::new(library))
    }
}

/// Name spellings that may appear in a directory name.
fn spellings(name: &str) -> Vec<String> {
    let mut out = vec![name.to_string()];
    for alt in [name.replace('_', "-"), name.replace('-', "_")] {
        if !out.contains(&alt) {
            out.push(alt);
        }
    }
    out
}

/// Returns `Some(version)` if `dir_name` names the library, where the inner
/// option is the parsed version suffix.
fn match_dir_name(dir_name: &str, spellings: &[String]) -> Option<Option<Version>> {
    for spelling in spellings {
        if dir_name == spelling {
            return Some(None);
        }
        if let Some(rest) = dir_name
            .strip_prefix(spelling.as_str())
            .and_then(|rest| rest.strip_prefix('-'))
            && let Ok(version) = Version::parse(rest)
        {
            return Some(Some(version));
        }
    }
    None
}

/// Creates a parser for Rust sources.
pub(crate) fn rust_parser() -> Result<Parser, LoadError> {
    let mut parser = Parser::new();
    parser.set_language(&LANGUAGE.into())?;
    Ok(parser)
}

/// Adds the public names found in one source file to `library`.
///
/// Returns `false` if the parser produced no tree.
pub(crate) fn scan_source(parser: &mut Parser, text: &str, library: &mut StaticLibrary) -> bool {
    let Some(tree) = parser.parse(text, None) else {
        return false;
    };
    collect_items(tree.root_node(), text, library);
    true
}

/// Walks the items of a `source_file` or an inline module body.
fn collect_items(node: Node, source: &str, library: &mut StaticLibrary) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "impl_item" => collect_impl(child, source, library),
            "use_declaration" if is_public(child, source) => {
                if let Some(argument) = child.child_by_field_name("argument") {
                    let mut names = Vec::new();
                    use_names(argument, source, &mut names);
                    for name in names {
                        library.add_symbol(Symbol::new(name, SymbolKind::Value));
                    }
                }
            }
            "mod_item" if is_public(child, source) => {
                if let Some(name) = field_text(child, "name", source) {
                    library.add_symbol(Symbol::new(name, SymbolKind::Module));
                }
                if let Some(body) = child.child_by_field_name("body") {
                    collect_items(body, source, library);
                }
            }
            "struct_item" | "union_item" | "enum_item" | "trait_item"
                if is_public(child, source) =>
            {
                collect_type(child, source, library);
            }
            "function_item" if is_public(child, source) => {
                add_named(child, SymbolKind::Function, source, library);
            }
            "const_item" | "static_item" | "type_item" if is_public(child, source) => {
                add_named(child, SymbolKind::Value, source, library);
            }
            _ => {}
        }
    }
}

fn add_named(node: Node, kind: SymbolKind, source: &str, library: &mut StaticLibrary) {
    if let Some(name) = field_text(node, "name", source) {
        library.add_symbol(Symbol::new(name, kind));
    }
}

/// A public struct, union, enum or trait and the members it declares itself.
fn collect_type(node: Node, source: &str, library: &mut StaticLibrary) {
    let Some(name) = field_text(node, "name", source) else {
        return;
    };
    let mut members = Vec::new();
    if let Some(body) = node.child_by_field_name("body") {
        let mut cursor = body.walk();
        for member in body.named_children(&mut cursor) {
            let wanted = match member.kind() {
                "field_declaration" => is_public(member, source),
                "enum_variant" => true,
                "function_item" | "function_signature_item" | "associated_type" | "const_item" => {
                    node.kind() == "trait_item"
                }
                _ => false,
            };
            if wanted && let Some(member_name) = field_text(member, "name", source) {
                members.push(member_name);
            }
        }
    }
    library.add_members(&name, members);
    library.add_symbol(Symbol::new(name, SymbolKind::Type));
}

/// Methods, constants and types of an `impl` block, attributed to its self
/// type. Inherent impls contribute only their `pub` items.
fn collect_impl(node: Node, source: &str, library: &mut StaticLibrary) {
    let Some(owner) = node
        .child_by_field_name("type")
        .and_then(|ty| type_name(ty, source))
    else {
        return;
    };
    let trait_impl = node.child_by_field_name("trait").is_some();
    let Some(body) = node.child_by_field_name("body") else {
        return;
    };

    let mut members = Vec::new();
    let mut cursor = body.walk();
    for item in body.named_children(&mut cursor) {
        if !matches!(item.kind(), "function_item" | "const_item" | "type_item") {
            continue;
        }
        if !trait_impl && !is_public(item, source) {
            continue;
        }
        if let Some(name) = field_text(item, "name", source) {
            members.push(name);
        }
    }
    library.add_members(owner, members);
}

/// The bare name of an impl's self type: `Table` for `crate::a::Table<T>`,
/// `&Table` or `Table<'a>`.
fn type_name<'a>(node: Node, source: &'a str) -> Option<&'a str> {
    match node.kind() {
        "type_identifier" => node.utf8_text(source.as_bytes()).ok(),
        "generic_type" | "reference_type" => type_name(node.child_by_field_name("type")?, source),
        "scoped_type_identifier" => type_name(node.child_by_field_name("name")?, source),
        "dynamic_type" => type_name(node.child_by_field_name("trait")?, source),
        _ => None,
    }
}

/// Names introduced by the argument of a `pub use`, honouring `as` renames.
/// Globs and `self`/`super`/`crate` introduce nothing.
fn use_names(node: Node, source: &str, out: &mut Vec<String>) {
    match node.kind() {
        "identifier" => {
            if let Ok(name) = node.utf8_text(source.as_bytes()) {
                out.push(name.to_string());
            }
        }
        "scoped_identifier" => {
            if let Some(name) = node.child_by_field_name("name")
                && name.kind() == "identifier"
            {
                use_names(name, source, out);
            }
        }
        "use_as_clause" => {
            if let Some(alias) = node.child_by_field_name("alias") {
                use_names(alias, source, out);
            }
        }
        "scoped_use_list" => {
            if let Some(list) = node.child_by_field_name("list") {
                use_names(list, source, out);
            }
        }
        "use_list" => {
            let mut cursor = node.walk();
            for child in node.named_children(&mut cursor) {
                use_names(child, source, out);
            }
        }
        _ => {}
    }
}

/// True for plain `pub`; `pub(crate)` and friends are not public API.
fn is_public(node: Node, source: &str) -> bool {
    let mut cursor = node.walk();
    node.children(&mut cursor).any(|child| {
        child.kind() == "visibility_modifier"
            && child.utf8_text(source.as_bytes()).is_ok_and(|text| text == "pub")
    })
}

fn field_text(node: Node, field: &str, source: &str) -> Option<String> {
    node.child_by_field_name(field)?
        .utf8_text(source.as_bytes())
        .ok()
        .map(str::to_string)
}
