//! Styles available to every document without being declared.

/// `(name, markup)` pairs loaded into the catalog before caller styles.
pub const BUILTIN_STYLES: &[(&str, &str)] = &[
    (
        "default_table_row",
        r#"<style:style style:family="table-row">
            <style:table-row-properties style:row-height="4.52mm"
            fo:break-before="auto" style:use-optimal-row-height="true"/>
            </style:style>"#,
    ),
    (
        "table_row_1cm",
        r#"<style:style style:family="table-row">
            <style:table-row-properties style:row-height="1cm"
            fo:break-before="auto"/>
            </style:style>"#,
    ),
    (
        "bold",
        r#"<style:style style:family="table-cell"
            style:parent-style-name="Default">
            <style:text-properties fo:font-weight="bold"
            style:font-weight-asian="bold" style:font-weight-complex="bold"/>
            <style:table-cell-properties style:text-align-source="value-type"/>
            <style:paragraph-properties fo:margin-right="1mm"/>
            </style:style>"#,
    ),
    (
        "left",
        r#"<style:style style:family="table-cell"
            style:parent-style-name="Default">
            <style:table-cell-properties style:text-align-source="fix"/>
            <style:paragraph-properties fo:text-align="start"
            fo:margin-left="1mm"/>
            </style:style>"#,
    ),
    (
        "right",
        r#"<style:style style:family="table-cell"
            style:parent-style-name="Default">
            <style:table-cell-properties style:text-align-source="fix"/>
            <style:paragraph-properties fo:text-align="end"
            fo:margin-right="1mm"/>
            </style:style>"#,
    ),
    (
        "center",
        r#"<style:style style:family="table-cell"
            style:parent-style-name="Default">
            <style:table-cell-properties style:text-align-source="fix"/>
            <style:paragraph-properties fo:text-align="center"/>
            </style:style>"#,
    ),
    (
        "bold_left_bg_gray_grid06",
        r##"<style:style style:family="table-cell"
            style:parent-style-name="Default">
            <style:text-properties fo:font-weight="bold"
            style:font-weight-asian="bold" style:font-weight-complex="bold"/>
            <style:table-cell-properties fo:background-color="#dddddd"
            fo:border="0.06pt solid #000000" style:text-align-source="fix"/>
            <style:paragraph-properties fo:text-align="start"
            fo:margin-left="1.2mm"/>
            </style:style>"##,
    ),
    (
        "grid06",
        r##"<style:style style:family="table-cell"
            style:parent-style-name="Default">
            <style:table-cell-properties fo:border="0.06pt solid #000000"/>
            <style:paragraph-properties
            fo:margin-left="1.2mm" fo:margin-right="1.2mm"/>
            </style:style>"##,
    ),
];
