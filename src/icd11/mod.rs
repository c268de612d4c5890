//! WHO ICD-11 simple tabulation processing
//!
//! The tabulation ships as a spreadsheet inside a ZIP archive. Rows encode
//! the classification tree by prefixing titles with `- ` per additional
//! level. Disease codes come from chapters 01 and 25, vaccine codes from
//! the blocks titled "Vaccines".

use crate::error::{Result, ToolkitError};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// WHO download endpoint for the simple tabulation archive
pub const SIMPLE_TABULATION_URL: &str =
    "https://icd.who.int/browse11/Downloads/Download?fileName=simpletabulation.zip";

/// Spreadsheet file name inside the archive
pub const SPREADSHEET_NAME: &str = "simpletabulation.xlsx";

/// Node kinds present in the simple tabulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Root,
    Chapter,
    Block,
    Category,
}

/// A node of the parsed classification tree
#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    pub name: String,
    /// ICD-11 code (categories only)
    pub code: Option<String>,
    /// Block identifier (blocks only)
    pub block: Option<String>,
    /// Chapter number (chapters only)
    pub chapter: Option<String>,
    pub children: Vec<Node>,
}

impl Node {
    fn root() -> Self {
        Node {
            kind: NodeKind::Root,
            name: String::new(),
            code: None,
            block: None,
            chapter: None,
            children: Vec::new(),
        }
    }
}

/// Depth encoded in a title: two characters of `- ` per extra level.
///
/// Chapters carry no prefix and sit at depth 2, one level below the root.
pub fn title_depth(title: &str) -> usize {
    let mut depth = 0;
    while title[2 * depth..].starts_with("- ") {
        depth += 1;
    }
    depth + 2
}

/// Extract the spreadsheet from the downloaded archive into `dir`
pub fn extract_spreadsheet(zip_bytes: &[u8], dir: &Path) -> Result<PathBuf> {
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(zip_bytes))?;
    let mut file = archive.by_name(SPREADSHEET_NAME)?;

    let path = dir.join(SPREADSHEET_NAME);
    let mut data = Vec::new();
    file.read_to_end(&mut data)?;
    std::fs::write(&path, data)?;
    Ok(path)
}

/// Convert the spreadsheet to CSV with a headless libreoffice run
pub fn spreadsheet_to_csv(xlsx: &Path) -> Result<PathBuf> {
    let dir = xlsx
        .parent()
        .ok_or_else(|| ToolkitError::Tool("spreadsheet path has no parent directory".to_string()))?;

    let output = Command::new("libreoffice")
        .args(["--headless", "--convert-to", "csv", "--infilter=CSV:44,34,76", "--outdir"])
        .arg(dir)
        .arg(xlsx)
        .output()
        .map_err(|e| ToolkitError::Tool(format!("failed to run libreoffice: {}", e)))?;

    if !output.status.success() {
        return Err(ToolkitError::Tool(format!(
            "libreoffice conversion failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    let csv = xlsx.with_extension("csv");
    if !csv.exists() {
        return Err(ToolkitError::Tool(format!(
            "libreoffice did not produce {}",
            csv.display()
        )));
    }
    Ok(csv)
}

/// Read the tabulation CSV, skipping the header row.
///
/// Rows too short to describe a node are dropped.
pub fn read_tabulation(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() < 11 {
            continue;
        }
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

/// Build the classification tree from the tabulation rows.
///
/// The rows are a pre-order traversal; a stack tracks the path from the
/// root to the current node.
pub fn build_tree(rows: &[Vec<String>]) -> Node {
    let mut stack: Vec<Node> = vec![Node::root()];

    for row in rows {
        if row.len() < 11 {
            continue;
        }

        let kind = match row[5].as_str() {
            "chapter" => NodeKind::Chapter,
            "block" => NodeKind::Block,
            "category" => NodeKind::Category,
            other => {
                debug!("ignoring tabulation row of kind {:?}", other);
                continue;
            }
        };

        let node = Node {
            kind,
            name: row[4].trim_start_matches("- ").to_string(),
            code: (kind == NodeKind::Category).then(|| row[2].clone()),
            block: (kind == NodeKind::Block).then(|| row[3].clone()),
            chapter: (kind == NodeKind::Chapter).then(|| row[8].clone()),
            children: Vec::new(),
        };

        collapse(&mut stack, title_depth(&row[4]));
        stack.push(node);
    }

    collapse(&mut stack, 2);
    stack.pop().unwrap_or_else(Node::root)
}

/// Fold completed subtrees into their parents until the stack is shorter
/// than `depth`.
fn collapse(stack: &mut Vec<Node>, depth: usize) {
    while stack.len() >= depth && stack.len() > 1 {
        let done = match stack.pop() {
            Some(node) => node,
            None => return,
        };
        match stack.last_mut() {
            Some(parent) => parent.children.push(done),
            None => return,
        }
    }
}

/// Collect nodes matching the predicate; the subtree below a match is not
/// searched further.
pub fn find_nodes<'a, F>(node: &'a Node, pred: &F) -> Vec<&'a Node>
where
    F: Fn(&Node) -> bool,
{
    if pred(node) {
        return vec![node];
    }
    let mut found = Vec::new();
    for child in &node.children {
        found.extend(find_nodes(child, pred));
    }
    found
}

/// Flatten a subtree into (code, name) pairs
pub fn code_map(node: &Node) -> Vec<(String, String)> {
    let mut codes = Vec::new();
    if let Some(code) = &node.code {
        codes.push((code.clone(), node.name.clone()));
    }
    for child in &node.children {
        codes.extend(code_map(child));
    }
    codes
}

/// Disease codes: 4-character categories below chapters 01 and 25
pub fn disease_codes(root: &Node) -> Vec<(String, String)> {
    let chapters = find_nodes(root, &|n: &Node| {
        n.kind == NodeKind::Chapter && matches!(n.chapter.as_deref(), Some("01") | Some("25"))
    });

    let mut codes: Vec<(String, String)> = chapters
        .iter()
        .flat_map(|n| code_map(n))
        .filter(|(code, _)| code.len() == 4)
        .collect();
    codes.sort_by(|a, b| a.0.cmp(&b.0));
    codes
}

/// Vaccine codes: categories below the blocks titled "Vaccines"
pub fn vaccine_codes(root: &Node) -> Vec<(String, String)> {
    let blocks = find_nodes(root, &|n: &Node| {
        n.kind == NodeKind::Block && n.name == "Vaccines"
    });

    let mut codes: Vec<(String, String)> = blocks.iter().flat_map(|n| code_map(n)).collect();
    codes.sort_by(|a, b| a.0.cmp(&b.0));
    codes
}
