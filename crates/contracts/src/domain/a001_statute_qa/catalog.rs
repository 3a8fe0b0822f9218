/// One selectable statute: server-side filename key plus display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentMapping {
    pub filename: &'static str,
    pub display: &'static str,
}

/// Client-embedded catalog of the seven statute PDFs. The selector renders
/// this list in order; the server's own listing only drives the count shown
/// in the status line.
pub const DOCUMENT_CATALOG: [DocumentMapping; 7] = [
    DocumentMapping {
        filename: "Indian Divorce Act_Combine.pdf",
        display: "THE DIVORCE ACT",
    },
    DocumentMapping {
        filename: "Indian Evidence Act.pdf",
        display: "THE INDIAN EVIDENCE ACT",
    },
    DocumentMapping {
        filename: "Indian Penal Code.pdf",
        display: "The Indian Penal Code",
    },
    DocumentMapping {
        filename: "Negotiable Instruments Act.pdf",
        display: "THE NEGOTIABLE INSTRUMENTS",
    },
    DocumentMapping {
        filename: "THE CODE OF CIVIL PROCEDURE.pdf",
        display: "THE CODE OF CIVIL PROCEDURE",
    },
    DocumentMapping {
        filename: "THE CODE OF CRIMINAL PROCEDURE.pdf",
        display: "THE CODE OF CRIMINAL PROCEDURE",
    },
    DocumentMapping {
        filename: "The Motor Vehicles Act.pdf",
        display: "THE MOTOR VEHICLES ACT",
    },
];

/// Display label for a filename, falling back to the raw filename for
/// documents outside the catalog.
pub fn display_name_for(filename: &str) -> &str {
    DOCUMENT_CATALOG
        .iter()
        .find(|doc| doc.filename == filename)
        .map(|doc| doc.display)
        .unwrap_or(filename)
}
