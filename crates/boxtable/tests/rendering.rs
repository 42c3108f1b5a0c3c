//! End-to-end rendering tests against exact expected grids.

use boxtable::{
    display_width, Align, BorderPalette, Column, ErrorKind, Overflow, Table, TableError,
};

const NAMES: [&str; 4] = ["John", "Jane", "Bob", "Alice"];
const COMMENTS: [&str; 4] = [
    "This is a comment",
    "This is another comment",
    "This is a third comment",
    "This is a fourth comment",
];

fn grid(lines: &[&str]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}

fn filled(mut column: Column, cells: &[&str]) -> Column {
    for cell in cells {
        column.add_cell(cell);
    }
    column
}

fn people() -> Table {
    let mut table = Table::builder().build();
    table.add_header(["name", "age"]);
    table
        .add_rows([["John", "25"], ["Tom", "14"], ["Mary", "16"]])
        .unwrap();
    table
}

#[test]
fn test_basic_style() {
    assert_eq!(
        people().render().unwrap(),
        "+------+-----+\n| NAME | AGE |\n+------+-----+\n| John | 25  |\n| Tom  | 14  |\n| Mary | 16  |\n+------+-----+\n"
    );
}

#[test]
fn test_row_boundaries() {
    let mut table = Table::builder().border(BorderPalette::BASIC_RULED).build();
    table.add_header(["name", "age"]);
    table
        .add_rows([["John", "25"], ["Tom", "14"], ["Mary", "16"]])
        .unwrap();
    assert_eq!(
        table.render().unwrap(),
        grid(&[
            "+------+-----+",
            "| NAME | AGE |",
            "+------+-----+",
            "| John | 25  |",
            "+------+-----+",
            "| Tom  | 14  |",
            "+------+-----+",
            "| Mary | 16  |",
            "+------+-----+",
        ])
    );
}

#[test]
fn test_wide_characters_with_two_titles() {
    let mut table = Table::builder()
        .title("TITLE line 1")
        .title("TITLE line 2")
        .build();
    table.add_header(["name", "age"]);
    table
        .add_rows([
            ["张远航", "25"],
            ["欧阳吹雪", "30"],
            ["王武", "40"],
            ["超级长的名字用于测试", "59"],
        ])
        .unwrap();

    assert_eq!(
        table.render().unwrap(),
        grid(&[
            "+----------------------------+",
            "|        TITLE LINE 1        |",
            "+----------------------------+",
            "|        TITLE LINE 2        |",
            "+----------------------+-----+",
            "|         NAME         | AGE |",
            "+----------------------+-----+",
            "| 张远航               | 25  |",
            "| 欧阳吹雪             | 30  |",
            "| 王武                 | 40  |",
            "| 超级长的名字用于测试 | 59  |",
            "+----------------------+-----+",
        ])
    );
}

#[test]
fn test_custom_palette_with_everything() {
    let palette = BorderPalette::new("ABCDEFGHIJKLMNOPQRSTUVWXYZ123".chars(), false).unwrap();
    let table = Table::builder()
        .title("TITLE LINE 1")
        .row_numbers(true)
        .overflow(Overflow::ClipLeft)
        .border(palette)
        .column(filled(
            Column::builder().header("name").footer("foot1").build(),
            &NAMES,
        ))
        .column(filled(
            Column::builder()
                .header("Comment")
                .footer("foot2")
                .width(10)
                .build(),
            &COMMENTS,
        ))
        .build();

    assert_eq!(
        table.render().unwrap(),
        grid(&[
            "ABBBBBBBBBBBBBBBBBBBBBBBBD",
            "E      TITLE LINE 1      G",
            "STTTCTTTTTTTCTTTTTTTTTTTTV",
            "E   F NAME  F  COMMENT   G",
            "STTTUTTTTTTTUTTTTTTTTTTTTV",
            "E 1 F John  F …a comment G",
            "E 2 F Jane  F …r comment G",
            "E 3 F Bob   F …d comment G",
            "E 4 F Alice F …h comment G",
            "OPPPQPPPPPPPQPPPPPPPPPPPPR",
            "E   F foot1 F   foot2    G",
            "Z1112111111121111111111113",
        ])
    );
}

#[test]
fn test_fancy_with_limit() {
    let table = Table::builder()
        .title("TITLE LINE 1")
        .border(BorderPalette::FANCY)
        .limit(2)
        .column(filled(
            Column::builder()
                .header("name")
                .footer("foot1")
                .header_align(Align::Right)
                .build(),
            &NAMES,
        ))
        .column(filled(
            Column::builder()
                .header("Comment")
                .footer("foot2")
                .data_align(Align::Center)
                .build(),
            &COMMENTS,
        ))
        .build();

    assert_eq!(
        table.render().unwrap(),
        grid(&[
            "╔═════════════════════════════════╗",
            "║          TITLE LINE 1           ║",
            "╠═══════╤═════════════════════════╣",
            "║  NAME │         COMMENT         ║",
            "╠═══════╪═════════════════════════╣",
            "║ John  │    This is a comment    ║",
            "║ Jane  │ This is another comment ║",
            "║ …     │            …            ║",
            "╟───────┼─────────────────────────╢",
            "║ foot1 │          foot2          ║",
            "╚═══════╧═════════════════════════╝",
        ])
    );
}

#[test]
fn test_fancy_footer_with_title() {
    let table = Table::builder()
        .title("Inventory")
        .border(BorderPalette::FANCY)
        .column(filled(
            Column::builder().header("item").footer("total").build(),
            &["a", "b"],
        ))
        .column(filled(
            Column::builder()
                .header("qty")
                .footer("3")
                .data_align(Align::Right)
                .build(),
            &["1", "2"],
        ))
        .build();

    assert_eq!(
        table.render().unwrap(),
        grid(&[
            "╔═════════════╗",
            "║  INVENTORY  ║",
            "╠═══════╤═════╣",
            "║ ITEM  │ QTY ║",
            "╠═══════╪═════╣",
            "║ a     │   1 ║",
            "║ b     │   2 ║",
            "╟───────┼─────╢",
            "║ total │  3  ║",
            "╚═══════╧═════╝",
        ])
    );
}

#[test]
fn test_empty_table_with_title() {
    let mut table = Table::builder()
        .title("title1")
        .border(BorderPalette::BASIC_RULED)
        .build();
    table.add_header(["name", "gender", "age"]);

    assert_eq!(
        table.render().unwrap(),
        grid(&[
            "+---------------------+",
            "|       TITLE1        |",
            "+------+--------+-----+",
            "| NAME | GENDER | AGE |",
            "+------+--------+-----+",
            "|      |        |     |",
            "+------+--------+-----+",
        ])
    );
}

#[test]
fn test_hidden_column_is_excluded() {
    let table = Table::builder()
        .column(filled(Column::builder().header("name").build(), &NAMES))
        .column(filled(
            Column::builder().header("age").visible(false).build(),
            &["1", "2", "3", "4"],
        ))
        .column(filled(Column::builder().header("comment").build(), &COMMENTS))
        .build();

    let rendered = table.render().unwrap();
    assert_eq!(
        rendered,
        grid(&[
            "+-------+--------------------------+",
            "| NAME  |         COMMENT          |",
            "+-------+--------------------------+",
            "| John  | This is a comment        |",
            "| Jane  | This is another comment  |",
            "| Bob   | This is a third comment  |",
            "| Alice | This is a fourth comment |",
            "+-------+--------------------------+",
        ])
    );
    assert!(!rendered.contains("AGE"));
}

#[test]
fn test_header_and_data_alignment() {
    let table = Table::builder()
        .column(filled(
            Column::builder()
                .header("name")
                .header_align(Align::Right)
                .build(),
            &NAMES,
        ))
        .column(filled(
            Column::builder()
                .header("comment")
                .header_align(Align::Center)
                .data_align(Align::Right)
                .build(),
            &COMMENTS,
        ))
        .build();

    assert_eq!(
        table.render().unwrap(),
        grid(&[
            "+-------+--------------------------+",
            "|  NAME |         COMMENT          |",
            "+-------+--------------------------+",
            "| John  |        This is a comment |",
            "| Jane  |  This is another comment |",
            "| Bob   |  This is a third comment |",
            "| Alice | This is a fourth comment |",
            "+-------+--------------------------+",
        ])
    );
}

#[test]
fn test_explicit_width_clips_right() {
    let table = Table::builder()
        .column(filled(Column::builder().header("name").build(), &NAMES))
        .column(filled(
            Column::builder().header("comment").width(10).build(),
            &COMMENTS,
        ))
        .build();

    assert_eq!(
        table.render().unwrap(),
        grid(&[
            "+-------+------------+",
            "| NAME  |  COMMENT   |",
            "+-------+------------+",
            "| John  | This is a… |",
            "| Jane  | This is a… |",
            "| Bob   | This is a… |",
            "| Alice | This is a… |",
            "+-------+------------+",
        ])
    );
}

#[test]
fn test_row_numbers() {
    let table = Table::builder()
        .row_numbers(true)
        .column(filled(Column::builder().header("name").build(), &NAMES))
        .build();

    assert_eq!(
        table.render().unwrap(),
        grid(&[
            "+---+-------+",
            "|   | NAME  |",
            "+---+-------+",
            "| 1 | John  |",
            "| 2 | Jane  |",
            "| 3 | Bob   |",
            "| 4 | Alice |",
            "+---+-------+",
        ])
    );
}

#[test]
fn test_row_numbers_with_limit_number_the_ellipsis_row() {
    let table = Table::builder()
        .row_numbers(true)
        .limit(2)
        .column(filled(Column::builder().header("name").build(), &NAMES))
        .build();

    assert_eq!(
        table.render().unwrap(),
        grid(&[
            "+---+------+",
            "|   | NAME |",
            "+---+------+",
            "| 1 | John |",
            "| 2 | Jane |",
            "| 3 | …    |",
            "+---+------+",
        ])
    );
}

#[test]
fn test_wide_character_clipping_keeps_line_width() {
    let table = Table::builder()
        .column(filled(
            Column::builder().header("name").width(5).build(),
            &["张远航", "Bob"],
        ))
        .build();

    let rendered = table.render().unwrap();
    assert_eq!(
        rendered,
        grid(&[
            "+-------+",
            "| NAME  |",
            "+-------+",
            "| 张远… |",
            "| Bob   |",
            "+-------+",
        ])
    );
    assert!(rendered.lines().all(|line| display_width(line) == 9));
}

#[test]
fn test_clipping_tabs_and_emoji_selectors_keeps_line_width() {
    let cells = ["abc\t\tdefg", "❤\u{FE0F}abc", "\u{1b}[31mred text"];
    for overflow in [Overflow::ClipRight, Overflow::ClipLeft] {
        let table = Table::builder()
            .overflow(overflow)
            .column(filled(Column::builder().header("note").width(4).build(), &cells))
            .build();

        let rendered = table.render().unwrap();
        assert!(
            rendered.lines().all(|line| display_width(line) == 8),
            "{rendered}"
        );
        if overflow == Overflow::ClipRight {
            assert!(rendered.contains("| abc… |\n"));
            assert!(rendered.contains("| ❤\u{FE0F}a… |\n"));
        }
    }
}

#[test]
fn test_custom_line_separator() {
    let mut table = Table::builder().line_separator("\r\n").build();
    table.add_header(["a"]);
    table.add_data("a", "x").unwrap();
    assert_eq!(
        table.render().unwrap(),
        "+---+\r\n| A |\r\n+---+\r\n| x |\r\n+---+\r\n"
    );
}

#[test]
fn test_render_twice_is_identical() {
    let table = Table::builder()
        .title("a title much wider than the data")
        .row_numbers(true)
        .limit(1)
        .column(filled(Column::builder().header("name").build(), &NAMES))
        .build();

    let first = table.render().unwrap();
    let second = table.render().unwrap();
    assert_eq!(first, second);
    assert_eq!(table.columns().len(), 1);
    assert_eq!(table.columns()[0].cell_count(), 4);
    assert_eq!(table.columns()[0].width(), 5);
}

#[test]
fn test_title_wider_than_columns_aligns_every_line() {
    let mut table = Table::builder()
        .title("a considerably longer title line")
        .border(BorderPalette::FANCY_RULED)
        .build();
    table.add_header(["a", "b", "c"]);
    table.add_rows([["1", "2", "3"], ["4", "5", "6"]]).unwrap();

    let rendered = table.render().unwrap();
    let widths: Vec<usize> = rendered.lines().map(display_width).collect();
    assert!(widths.iter().all(|w| *w == widths[0]));
    // two border glyphs, one padding each side, the title itself
    assert_eq!(widths[0], 2 + 2 + "a considerably longer title line".len());
}

#[test]
fn test_errors_surface_with_kinds() {
    let err = Table::builder().build().render().unwrap_err();
    assert!(matches!(err, TableError::NoColumns));
    assert_eq!(err.kind(), ErrorKind::StructuralMismatch);

    let mut ragged = people();
    ragged.add_data("age", 99).unwrap();
    let err = ragged.render().unwrap_err();
    assert!(matches!(err, TableError::RowCountMismatch { .. }));
    assert_eq!(err.kind(), ErrorKind::StructuralMismatch);

    let hidden = Table::builder()
        .column(Column::builder().header("x").visible(false).build())
        .build();
    assert!(matches!(
        hidden.render().unwrap_err(),
        TableError::NoVisibleColumns
    ));

    let err = BorderPalette::new("+-|".chars(), false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn test_presets_are_shared_safely() {
    let mut a = Table::builder().border(BorderPalette::FANCY).build();
    let mut b = Table::builder().border(BorderPalette::FANCY).build();
    a.add_header(["x"]);
    b.add_header(["a much wider header"]);
    let first = a.render().unwrap();
    b.render().unwrap();
    assert_eq!(first, a.render().unwrap());
    assert_eq!(BorderPalette::FANCY.glyphs().len(), 29);
}
