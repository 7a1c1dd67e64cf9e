pub mod tt_html;
