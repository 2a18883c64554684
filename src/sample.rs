//! Built-in demo input, lexed when no file is given on the command line

/// A small Swift program exercising keywords, strings and interpolation
pub const SWIFT_SAMPLE: &str = r#"
import Foundation


let name = "Phone"
var age = 5
if age > 3 {
    print("Hello, \(name)!")
} else {
    print("Too young!")
}
"#;
