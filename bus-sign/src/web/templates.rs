//! Askama templates for the web frontend.

use askama::Template;

/// Full-screen sign page. Reloads itself every `refresh_secs` seconds.
#[derive(Template)]
#[template(
    ext = "html",
    source = r##"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <meta http-equiv="refresh" content="{{ refresh_secs }}" />
    <title>Bus Times</title>
    <style>
      html, body { height: 100%; }
      body {
        margin: 0;
        background: #000;
        color: #ffb000;
        display: flex;
        align-items: center;
        justify-content: center;
      }
      pre {
        margin: 0;
        padding: 2.5vh 3vw;
        font-family: ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, "Liberation Mono", "Courier New", monospace;
        font-weight: 700;
        font-size: clamp(20px, 6vw, 90px);
        line-height: 1.05;
        white-space: pre;
      }
    </style>
  </head>
  <body>
    <pre>{{ sign }}</pre>
  </body>
</html>"##
)]
pub struct SignPageTemplate {
    pub sign: String,
    pub refresh_secs: u32,
}
