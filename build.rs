//! Build script to generate the embedded game playlist
//!
//! Reads `NAME|image|fact` lines and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_dish_table(
        "data/game_dishes.txt",
        &Path::new(&out_dir).join("game_dishes.rs"),
        "GAME_DISHES",
        "Dishes played in the guess-the-dish game, in level order",
    );

    // Rebuild if data files change
    println!("cargo:rerun-if-changed=data/game_dishes.txt");
    println!("cargo:rerun-if-changed=data/catalog.json");
}

fn generate_dish_table(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let rows: Vec<[&str; 3]> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            let mut fields = line.splitn(3, '|').map(str::trim);
            let name = fields.next().unwrap_or_default();
            let image = fields
                .next()
                .unwrap_or_else(|| panic!("Missing image field in {input_path}: {line}"));
            let fact = fields
                .next()
                .unwrap_or_else(|| panic!("Missing fact field in {input_path}: {line}"));
            [name, image, fact]
        })
        .collect();
    let count = rows.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated dish table").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment} (`name`, `image`, `fact`)").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, &str, &str)] = &[").unwrap();

    for [name, image, fact] in rows {
        writeln!(output, "    ({name:?}, {image:?}, {fact:?}),").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
