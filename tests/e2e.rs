use pretty_assertions::assert_eq;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use bec::parser_io::SymbolicParseTree;
use bec::Compiler;

fn file_check_pdnf<P: AsRef<Path>>(file: P) -> Option<String> {
    let f = File::open(file).unwrap();

    Compiler::from_reader(&mut BufReader::new(f))
        .expect("Could not read input file")
        .check_pdnf()
}

#[test]
fn test_files_pdnf() {
    for file in glob::glob("tests/data/*_is_pdnf.txt").unwrap() {
        let f = file.unwrap();
        println!("testing {}", f.display());
        assert_eq!(file_check_pdnf(&f), None, "{}", f.display());
    }
}

fn expected_diagnostic(file: &Path) -> &'static str {
    match file.file_name().and_then(|name| name.to_str()) {
        Some("equal_conjunctions_not_pdnf.txt") => "got equal elementary conjunction",
        Some("implication_not_pdnf.txt") => "expected or operator",
        Some("mixed_operators_not_pdnf.txt") => "unexpected type: got: token type: and operator, at position: 5, with value: &, but want: close bracket",
        Some("repeated_not_pdnf.txt") => "got repeated element: A",
        Some("trailing_not_pdnf.txt") => "syntax error in your formula, unexpected identifier: token type: symbol, at position: 18, with value: A",
        _ => panic!("no expected diagnostic for {}", file.display()),
    }
}

#[test]
fn test_files_not_pdnf() {
    let mut checked = 0;

    for file in glob::glob("tests/data/*_not_pdnf.txt").unwrap() {
        let f = file.unwrap();
        println!("testing {}", f.display());
        assert_eq!(
            file_check_pdnf(&f),
            Some(expected_diagnostic(&f).to_string()),
            "{}",
            f.display()
        );
        checked += 1;
    }

    assert_eq!(checked, 5);
}

#[test]
fn test_trailing_input_file() {
    assert_eq!(
        file_check_pdnf("tests/data/trailing_not_pdnf.txt"),
        Some("syntax error in your formula, unexpected identifier: token type: symbol, at position: 18, with value: A".to_string())
    );
}

#[test]
fn test_render_dot() {
    let formula = Compiler::new("((A&B)|(!A))").parse().unwrap();
    let tree = SymbolicParseTree::new(&formula.root);

    assert_eq!(tree.nodes.len(), 6);

    let mut output: Vec<u8> = Vec::new();
    tree.render_dot(&mut output).unwrap();
    let rendered = String::from_utf8(output).unwrap();

    assert!(rendered.starts_with("digraph parse_tree"));
    assert!(rendered.contains("label=\"NOT\""));
    assert!(rendered.contains("label=\"OR\""));
    assert_eq!(rendered.matches(" -> ").count(), 5);
}
