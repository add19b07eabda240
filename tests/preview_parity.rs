#![cfg(feature = "parity")]

use blockprint::model::palette::new_block;
use blockprint::model::{
    Block, BlockContent, BlockKind, ElementKey, SequentialIds, StyleBag, Template, TextContent,
};
use blockprint::preview::parity::{check_block_parity, check_template_parity, styled_elements};
use blockprint::preview::{Affordance, Capabilities};
use blockprint::{PreviewRenderer, PreviewState};

#[test]
fn default_blocks_of_every_kind_match_their_export() {
    let ids = SequentialIds::new();
    for kind in BlockKind::ALL {
        let block = new_block(kind, &ids);
        let report = check_block_parity(&block);
        assert!(report.compared > 0, "{kind} compared no elements");
        assert!(report.is_match(), "{kind}: {:#?}", report.mismatches);
    }
}

#[test]
fn styled_blocks_keep_parity() {
    let block = Block::new(
        "t1",
        BlockContent::Title(TextContent {
            content: "Launch day".into(),
        }),
    )
    .with_style(StyleBag {
        font_size: Some(28.0),
        padding_top: Some(4.0),
        background_color: Some("#fafafa".into()),
        border_width: Some(1.0),
        ..Default::default()
    })
    .with_element_style(
        ElementKey::Text,
        StyleBag {
            font_color: Some("#112233".into()),
            ..Default::default()
        },
    );
    let template = Template::new("t", "Parity").with_blocks(vec![block]);
    let reports = check_template_parity(&PreviewRenderer::default(), &template);
    assert_eq!(reports.len(), 1);
    assert!(reports[0].is_match(), "{:#?}", reports[0].mismatches);
}

#[test]
fn selection_chrome_is_outside_the_compared_tree() {
    let ids = SequentialIds::new();
    let block = new_block(BlockKind::Image, &ids);
    let template = Template::new("t", "Chrome").with_blocks(vec![block.clone()]);
    let state = PreviewState {
        selected: Some(block.id.clone()),
        capabilities: Capabilities::all(),
        ..Default::default()
    };

    let nodes = PreviewRenderer::default().render(&template, &state);
    let node = &nodes[0];
    assert!(node.selected);
    assert!(node.offers(Affordance::Resize));
    assert!(node.html.contains("data-bp-chrome=\"toolbar\""));
    assert!(node.html.contains("data-bp-chrome=\"resize-handle\""));

    let export = PreviewRenderer::default().serializer().render_fragment(&block);
    assert_eq!(styled_elements(&node.html), styled_elements(&export.html));
}
