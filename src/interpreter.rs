/// The arithmetic module applies the four binary operators.
///
/// Parses operator symbols and computes `+ - * /` on integer values, with
/// truncating division.
///
/// # Responsibilities
/// - Maps `+ - * /` to the `Operator` enum and rejects anything else.
/// - Reports division by zero.
pub mod arithmetic;
/// The converter module translates between Roman text and integers.
///
/// Roman text is read with the one-pass subtractive scan and written back
/// with greedy subtraction over the standard symbol table.
///
/// # Responsibilities
/// - Converts Roman numerals to integers, rejecting letters outside
///   `IVXLCDM`.
/// - Renders integers as canonical Roman numerals within a ceiling.
pub mod converter;
/// The evaluator module runs a whole line from text to result.
///
/// It splits the line into three tokens, classifies and converts both
/// operands, checks that they share a numeral system, computes the result and
/// writes it back in the operands' system.
///
/// # Responsibilities
/// - Enforces the `operand operator operand` shape.
/// - Rejects expressions mixing Arabic and Roman operands.
/// - Propagates arithmetic and rendering failures unchanged.
pub mod evaluator;
/// The lexer module recognises single tokens.
///
/// Built on `logos`, it tells decimal literals, Roman letter strings and
/// operator symbols apart.
///
/// # Responsibilities
/// - Lexes one space-separated field into at most one token.
/// - Rejects fields with unknown characters or several tokens.
pub mod lexer;
/// The numeral module classifies operands.
///
/// Defines the `NumeralSystem` tag and the `Classifier`, which applies the
/// configured ceiling and Roman policy to decide what a token is and what it
/// is worth.
///
/// # Responsibilities
/// - Decides whether a token is an Arabic or a Roman numeral.
/// - Range-checks operand values before they reach the arithmetic.
/// - Renders results in a given numeral system.
pub mod numeral;
