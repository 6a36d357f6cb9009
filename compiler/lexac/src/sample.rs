/// Built-in sample program.
///
/// Touches every token kind: a comment, keywords, identifiers, integer and
/// decimal numbers, a string literal, comparison and assignment operators,
/// and all the common punctuation.
pub const SAMPLE_SOURCE: &str = r#"// Sample code for lexical analysis
int main() {
    int x = 10;
    float y = 3.14;
    string message = "Hello, World!";

    if (x > 5) {
        print(message);
    }

    return 0;
}
"#;
