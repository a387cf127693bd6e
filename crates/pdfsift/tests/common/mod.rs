//! PDF fixtures generated with lopdf.

#![allow(dead_code)]

use std::io::Write;

use lopdf::{Object, Stream, dictionary};

/// Content stream of a ruled grid whose cells hold `R<row>C<col>` labels.
///
/// Cells are 100pt wide and 20pt tall with the top-left corner at (100, 700).
/// The stream strategy detects it as a single table.
pub fn ruled_grid(rows: usize, cols: usize) -> Vec<u8> {
    let (left, top, width, height) = (100, 700, 100, 20);
    let right = left + width * cols;
    let bottom = top - height * rows;

    let mut content = String::from("1 w\n");
    for r in 0..=rows {
        let y = top - height * r;
        content.push_str(&format!("{left} {y} m {right} {y} l S\n"));
    }
    for c in 0..=cols {
        let x = left + width * c;
        content.push_str(&format!("{x} {top} m {x} {bottom} l S\n"));
    }
    for r in 0..rows {
        for c in 0..cols {
            let x = left + width * c + 10;
            let y = top - height * r - 15;
            content.push_str(&format!("BT /F1 10 Tf {x} {y} Td (R{r}C{c}) Tj ET\n"));
        }
    }
    content.into_bytes()
}

/// Row-major cell labels of [`ruled_grid`].
pub fn grid_labels(rows: usize, cols: usize) -> Vec<String> {
    (0..rows)
        .flat_map(|r| (0..cols).map(move |c| format!("R{r}C{c}")))
        .collect()
}

/// Content stream showing one line of Helvetica text.
pub fn text_line(text: &str) -> Vec<u8> {
    format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET").into_bytes()
}

/// Build a document with one page per content stream. An empty stream gives
/// a page without text.
pub fn pdf_with_contents(contents: &[Vec<u8>]) -> Vec<u8> {
    let mut doc = lopdf::Document::with_version("1.5");

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let media_box = vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Integer(612),
        Object::Integer(792),
    ];

    let mut page_ids = Vec::new();
    for content in contents {
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.clone()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "MediaBox" => media_box.clone(),
            "Contents" => Object::Reference(content_id),
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => Object::Reference(font_id) },
            },
        });
        page_ids.push(page_id);
    }

    let kids: Vec<Object> = page_ids.iter().map(|id| Object::Reference(*id)).collect();
    let pages_id = doc.add_object(dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => Object::Integer(contents.len() as i64),
    });

    for &page_id in &page_ids {
        if let Ok(page_obj) = doc.get_object_mut(page_id) {
            if let Ok(dict) = page_obj.as_dict_mut() {
                dict.set("Parent", Object::Reference(pages_id));
            }
        }
    }

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

/// One page of text per entry.
pub fn pdf_with_pages(texts: &[&str]) -> Vec<u8> {
    let contents: Vec<Vec<u8>> = texts.iter().map(|t| text_line(t)).collect();
    pdf_with_contents(&contents)
}

/// Write PDF bytes to a temporary `.pdf` file.
pub fn write_temp_pdf(bytes: &[u8]) -> tempfile::NamedTempFile {
    let mut f = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
    f.write_all(bytes).unwrap();
    f.flush().unwrap();
    f
}
