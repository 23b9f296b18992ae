// tests/common/mod.rs
#![allow(dead_code)]
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream, StringFormat};
use std::path::Path;

pub const JANE_DOE: &[&str] = &[
    "Jane Doe",
    "jane.doe@example.com | +1 555-123-4567",
    "Summary",
    "Backend developer who enjoys Python.",
    "Education",
    "BA Computer Science, 2020",
    "Experience",
    "Software Engineer, Acme Corp",
    "Skills",
    "Rust, Docker, SQL",
    "Languages",
    "English, German",
];

const FONT_SIZE: i64 = 11;
const LEADING: i64 = 16;

// Maps two-byte codes 0x0020..0x007E straight to the same Unicode code points
const IDENTITY_TO_UNICODE: &str = "\
/CIDInit /ProcSet findresource begin
12 dict begin
begincmap
/CIDSystemInfo << /Registry (Adobe) /Ordering (UCS) /Supplement 0 >> def
/CMapName /Adobe-Identity-UCS def
/CMapType 2 def
1 begincodespacerange
<0000> <FFFF>
endcodespacerange
1 beginbfrange
<0020> <007E> <0020>
endbfrange
endcmap
CMapName currentdict /CMap defineresource pop
end
end
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    /// Standard Courier with a simple one-byte encoding.
    Courier,
    /// Type0 font with Identity-H encoding and a ToUnicode map, as Word and
    /// Google Docs exports use.
    IdentityH,
}

/// How a page's content stream is laid out.
#[derive(Debug, Clone, Copy)]
pub enum PageContent<'a> {
    /// One BT..ET text object per line.
    ObjectPerLine(&'a [&'a str]),
    /// A single text object with `Td` moves between lines.
    SingleObject(&'a [&'a str]),
    /// A `Tf` whose font operand is a number, which no decoder accepts.
    Undecodable,
}

/// Writes a PDF with one page per entry of `pages`, one text object per line.
pub fn write_pdf(path: &Path, pages: &[&[&str]]) {
    let contents: Vec<PageContent> = pages.iter().map(|lines| PageContent::ObjectPerLine(lines)).collect();
    build(Font::Courier, &contents).save(path).unwrap();
}

pub fn write_resume_pdf(path: &Path) {
    write_pdf(path, &[JANE_DOE]);
}

/// One page whose lines share a single text object, as pdfTeX writes them.
pub fn write_single_object_pdf(path: &Path, lines: &[&str]) {
    build(Font::Courier, &[PageContent::SingleObject(lines)])
        .save(path)
        .unwrap();
}

/// One page set in an Identity-H font.
pub fn write_identity_font_pdf(path: &Path, lines: &[&str]) {
    build(Font::IdentityH, &[PageContent::ObjectPerLine(lines)])
        .save(path)
        .unwrap();
}

pub fn write_pages(path: &Path, pages: &[PageContent]) {
    build(Font::Courier, pages).save(path).unwrap();
}

/// The resume with an `/Encrypt` entry in the trailer.
pub fn write_encrypted_pdf(path: &Path) {
    let mut doc = build(Font::Courier, &[PageContent::ObjectPerLine(JANE_DOE)]);
    let encrypt_id = doc.add_object(dictionary! {
        "Filter" => "Standard",
        "V" => 1,
        "R" => 2,
        "O" => Object::String(vec![0x41; 32], StringFormat::Hexadecimal),
        "U" => Object::String(vec![0x42; 32], StringFormat::Hexadecimal),
        "P" => -4,
    });
    doc.trailer.set("Encrypt", encrypt_id);
    doc.save(path).unwrap();
}

fn build(font: Font, pages: &[PageContent]) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = add_font(&mut doc, font);

    let mut kids: Vec<Object> = Vec::new();
    for page in pages {
        let operations = match *page {
            PageContent::ObjectPerLine(lines) => object_per_line(font, lines),
            PageContent::SingleObject(lines) => single_object(font, lines),
            PageContent::Undecodable => vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec![12.into(), FONT_SIZE.into()]),
                Operation::new("Td", vec![50.into(), 780.into()]),
                Operation::new("Tj", vec![Object::string_literal("Lost line")]),
                Operation::new("ET", vec![]),
            ],
        };
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => font_id },
            },
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

fn add_font(doc: &mut Document, font: Font) -> ObjectId {
    match font {
        Font::Courier => doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
            "Encoding" => "WinAnsiEncoding",
        }),
        Font::IdentityH => {
            let descriptor_id = doc.add_object(dictionary! {
                "Type" => "FontDescriptor",
                "FontName" => "CourierCID",
                "Flags" => 33,
                "FontBBox" => vec![0.into(), (-200).into(), 600.into(), 800.into()],
                "ItalicAngle" => 0,
                "Ascent" => 800,
                "Descent" => -200,
                "CapHeight" => 700,
                "StemV" => 80,
            });
            let cid_font_id = doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "CIDFontType2",
                "BaseFont" => "CourierCID",
                "CIDSystemInfo" => dictionary! {
                    "Registry" => Object::string_literal("Adobe"),
                    "Ordering" => Object::string_literal("Identity"),
                    "Supplement" => 0,
                },
                "FontDescriptor" => descriptor_id,
                "DW" => 600,
                "CIDToGIDMap" => "Identity",
            });
            let to_unicode_id = doc.add_object(Stream::new(
                dictionary! {},
                IDENTITY_TO_UNICODE.as_bytes().to_vec(),
            ));
            doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type0",
                "BaseFont" => "CourierCID",
                "Encoding" => "Identity-H",
                "DescendantFonts" => vec![cid_font_id.into()],
                "ToUnicode" => to_unicode_id,
            })
        }
    }
}

fn show(font: Font, line: &str) -> Operation {
    let operand = match font {
        Font::Courier => Object::string_literal(line),
        Font::IdentityH => Object::String(
            line.chars().flat_map(|c| (c as u16).to_be_bytes()).collect(),
            StringFormat::Hexadecimal,
        ),
    };
    Operation::new("Tj", vec![operand])
}

fn object_per_line(font: Font, lines: &[&str]) -> Vec<Operation> {
    let mut operations = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new("Tf", vec!["F1".into(), FONT_SIZE.into()]));
        operations.push(Operation::new(
            "Td",
            vec![50.into(), (780 - LEADING * i as i64).into()],
        ));
        operations.push(show(font, line));
        operations.push(Operation::new("ET", vec![]));
    }
    operations
}

fn single_object(font: Font, lines: &[&str]) -> Vec<Operation> {
    let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), FONT_SIZE.into()]),
        Operation::new("Td", vec![50.into(), 780.into()]),
    ];
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            operations.push(Operation::new("Td", vec![0.into(), (-LEADING).into()]));
        }
        operations.push(show(font, line));
    }
    operations.push(Operation::new("ET", vec![]));
    operations
}
