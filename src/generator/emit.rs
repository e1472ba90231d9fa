//! Dart source emission.

use super::record::AssetRecord;

/// Banner placed at the top of every generated file.
pub const GENERATED_BANNER: &str =
    "/// This file is automatically generated. DO NOT EDIT, all your changes would be lost.";

/// Render the records into the generated Dart source.
///
/// Layout, byte for byte: banner, class open, private unnamed constructor
/// (the class is a non-constructible holder of constants), one constant
/// line per record in the given order, a single blank line, class close.
/// The blank line before the closing brace keeps output identical to the
/// historical upstream format. No timestamps: identical input gives
/// identical bytes.
pub fn emit(class_name: &str, records: &[AssetRecord]) -> String {
    let mut out = String::new();
    out.push_str(GENERATED_BANNER);
    out.push('\n');
    out.push_str(&format!("class {class_name} {{\n"));
    out.push_str(&format!("  {class_name}._();\n"));
    for record in records {
        out.push_str(&format!(
            "  static const String {} = '{}';\n",
            record.identifier_name, record.code_value
        ));
    }
    out.push('\n');
    out.push_str("}\n");
    out
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use std::path::{Path, PathBuf};

    fn record(absolute: &str, root: &str) -> AssetRecord {
        AssetRecord::new(
            PathBuf::from(absolute),
            Path::new("/p"),
            root,
            &GeneratorConfig::default(),
        )
    }

    #[test]
    fn test_emit_exact_layout() {
        let records = vec![
            record("/p/assets/img/a.png", "assets/img"),
            record("/p/assets/img/sub/b.png", "assets/img"),
        ];
        let source = emit("Assets", &records);

        assert_eq!(
            source,
            "/// This file is automatically generated. DO NOT EDIT, all your changes would be lost.\n\
             class Assets {\n\
             \x20 Assets._();\n\
             \x20 static const String imgA = 'assets/img/a.png';\n\
             \x20 static const String subB = 'assets/img/sub/b.png';\n\
             \n\
             }\n"
        );
    }

    #[test]
    fn test_emit_empty_records() {
        let source = emit("Assets", &[]);
        assert_eq!(
            source,
            format!("{GENERATED_BANNER}\nclass Assets {{\n  Assets._();\n\n}}\n")
        );
    }

    #[test]
    fn test_emit_is_deterministic() {
        let records = vec![record("/p/assets/img/a.png", "assets/img")];
        assert_eq!(emit("Assets", &records), emit("Assets", &records));
    }

    #[test]
    fn test_emit_preserves_given_order() {
        // The emitter renders in the exact order given; sorting is the
        // builder's job
        let records = vec![
            record("/p/assets/img/z.png", "assets/img"),
            record("/p/assets/img/a.png", "assets/img"),
        ];
        let source = emit("Assets", &records);
        let z = source.find("imgZ").unwrap();
        let a = source.find("imgA").unwrap();
        assert!(z < a);
    }
}
