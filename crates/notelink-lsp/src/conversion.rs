//! Conversion utilities between Core types and LSP types

use notelink_core::model::{Point, TextRange};
use tower_lsp::lsp_types::{
    DocumentChangeOperation, DocumentChanges, OneOf, OptionalVersionedTextDocumentIdentifier,
    Position, Range, TextDocumentEdit, TextEdit, Url, WorkspaceEdit,
};

/// Convert LSP Position to Core Point
pub fn lsp_position_to_point(position: Position) -> Point {
    Point {
        line: position.line,
        col: position.character,
    }
}

/// Convert Core Point to LSP Position
pub fn point_to_lsp_position(point: Point) -> Position {
    Position {
        line: point.line,
        character: point.col,
    }
}

/// Convert LSP Range to Core TextRange
pub fn lsp_range_to_text_range(range: Range) -> TextRange {
    TextRange {
        start: lsp_position_to_point(range.start),
        end: lsp_position_to_point(range.end),
    }
}

/// Convert Core TextRange to LSP Range
pub fn text_range_to_lsp_range(range: TextRange) -> Range {
    Range {
        start: point_to_lsp_position(range.start),
        end: point_to_lsp_position(range.end),
    }
}

/// Build the WorkspaceEdit that replaces `selection` in `uri` with
/// `new_text`. A collapsed selection carries an empty range, which the
/// client applies as a plain insertion.
pub fn selection_replacement(uri: Url, selection: TextRange, new_text: &str) -> WorkspaceEdit {
    WorkspaceEdit {
        changes: None,
        document_changes: Some(DocumentChanges::Operations(vec![
            DocumentChangeOperation::Edit(TextDocumentEdit {
                text_document: OptionalVersionedTextDocumentIdentifier { uri, version: None },
                edits: vec![OneOf::Left(TextEdit {
                    range: text_range_to_lsp_range(selection),
                    new_text: new_text.to_string(),
                })],
            }),
        ])),
        change_annotations: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_round_trip() {
        let range = Range {
            start: Position {
                line: 3,
                character: 7,
            },
            end: Position {
                line: 3,
                character: 12,
            },
        };
        assert_eq!(
            text_range_to_lsp_range(lsp_range_to_text_range(range)),
            range
        );
    }

    #[test]
    fn test_collapsed_selection_is_detected() {
        let cursor = lsp_range_to_text_range(Range {
            start: Position {
                line: 1,
                character: 4,
            },
            end: Position {
                line: 1,
                character: 4,
            },
        });
        assert!(cursor.is_collapsed());
    }

    #[test]
    fn test_selection_replacement_emits_a_single_text_edit() {
        let uri = Url::parse("file:///notes/index.md").unwrap();
        let selection = lsp_range_to_text_range(Range {
            start: Position {
                line: 0,
                character: 0,
            },
            end: Position {
                line: 0,
                character: 5,
            },
        });

        let edit = selection_replacement(uri.clone(), selection, "[x](y.md)");

        let Some(DocumentChanges::Operations(ops)) = edit.document_changes else {
            panic!("expected document change operations");
        };
        assert_eq!(ops.len(), 1);
        match &ops[0] {
            DocumentChangeOperation::Edit(doc_edit) => {
                assert_eq!(doc_edit.text_document.uri, uri);
                assert_eq!(doc_edit.edits.len(), 1);
                match &doc_edit.edits[0] {
                    OneOf::Left(text_edit) => {
                        assert_eq!(text_edit.new_text, "[x](y.md)");
                        assert_eq!(text_edit.range.end.character, 5);
                    }
                    OneOf::Right(_) => panic!("expected a plain TextEdit"),
                }
            }
            other => panic!("expected an Edit operation, got {:?}", other),
        }
    }
}
