//! PDF document assembly with lopdf

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};

use super::error::ConvertError;
use super::types::{LaidOutPage, PageLayout};

/// Resource name of the single font used on every page
const FONT_RESOURCE: &str = "F1";

/// Serialize laid-out pages into PDF bytes
pub fn write_document(
    pages: &[LaidOutPage],
    layout: &PageLayout,
    title: Option<&str>,
) -> Result<Vec<u8>, ConvertError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            FONT_RESOURCE => font_id,
        },
    });

    let (width, height) = layout.media_box();
    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());

    for page in pages {
        let content_id = add_content_stream(&mut doc, page, layout)?;
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    let media_box: Vec<Object> = vec![0i64.into(), 0i64.into(), width.into(), height.into()];
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "MediaBox" => media_box,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut info = dictionary! {
        "Producer" => Object::string_literal(concat!("txt2pdf-server ", env!("CARGO_PKG_VERSION"))),
    };
    if let Some(title) = title {
        info.set("Title", Object::string_literal(title));
    }
    let info_id = doc.add_object(info);
    doc.trailer.set("Info", info_id);

    doc.compress();

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| ConvertError::Render(e.to_string()))?;
    Ok(bytes)
}

/// One BT/ET block per line keeps each line independently positioned
fn add_content_stream(
    doc: &mut Document,
    page: &LaidOutPage,
    layout: &PageLayout,
) -> Result<ObjectId, ConvertError> {
    let font_size = layout.font_size.round() as i64;
    let mut operations = Vec::with_capacity(page.lines.len() * 4);

    for line in page.lines.iter().filter(|l| !l.glyphs.is_empty()) {
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new(
            "Tf",
            vec![FONT_RESOURCE.into(), font_size.into()],
        ));
        operations.push(Operation::new("Td", vec![line.x.into(), line.y.into()]));
        operations.push(Operation::new(
            "Tj",
            vec![Object::string_literal(line.glyphs.clone())],
        ));
        operations.push(Operation::new("ET", vec![]));
    }

    let content = Content { operations };
    let encoded = content
        .encode()
        .map_err(|e| ConvertError::Render(e.to_string()))?;

    Ok(doc.add_object(Stream::new(dictionary! {}, encoded)))
}
