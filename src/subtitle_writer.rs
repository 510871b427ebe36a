use std::fmt::Write as _;

use log::debug;

use crate::render_job::ClipPlan;
use crate::transcript::format_ass_timestamp;

// @module: ASS caption document generation for burned-in subtitles

/// Font and border parameters for one named caption preset.
///
/// Presets are opaque to the pipeline itself; this writer is the only
/// place that interprets the style name, and only to pick a preset.
#[derive(Debug, Clone)]
pub struct CaptionStyle {
    font_name: &'static str,
    font_size: u32,
    primary_colour: &'static str,
    outline_colour: &'static str,
    back_colour: &'static str,
    bold: u8,
    border_style: u8,
    outline: u32,
    /// ASS alignment code (2 = bottom-center)
    alignment: u8,
    margin_v: u32,
}

impl CaptionStyle {
    /// Look up a preset by name, falling back to the default
    pub fn preset(name: &str) -> Self {
        match name {
            "minimal" => CaptionStyle {
                font_name: "Arial",
                font_size: 36,
                primary_colour: "&H00FFFFFF",
                outline_colour: "&H00000000",
                back_colour: "&H00000000",
                bold: 0,
                border_style: 1,
                outline: 2,
                alignment: 2,
                margin_v: 60,
            },
            "headline" => CaptionStyle {
                font_name: "Impact",
                font_size: 56,
                primary_colour: "&H0000FFFF",
                outline_colour: "&H00000000",
                back_colour: "&H80000000",
                bold: 1,
                border_style: 3,
                outline: 3,
                alignment: 8, // top-center
                margin_v: 80,
            },
            _ => CaptionStyle {
                font_name: "Arial Black",
                font_size: 48,
                primary_colour: "&H00FFFFFF",
                outline_colour: "&H00000000",
                back_colour: "&H80000000",
                bold: 1,
                border_style: 3,
                outline: 3,
                alignment: 2,
                margin_v: 60,
            },
        }
    }
}

/// Render one clip's caption cues as a complete ASS document.
///
/// Declarative text only; the external encoder burns it in. Cue times
/// are already clip-local, so they map directly to ASS event times.
pub fn render_ass(clip: &ClipPlan, style_name: &str, play_res: (u32, u32)) -> String {
    let style = CaptionStyle::preset(style_name);
    let mut doc = ass_header(&style, play_res);

    for cue in &clip.captions {
        let start = format_ass_timestamp(cue.display_start_sec);
        let end = format_ass_timestamp(cue.display_end_sec);
        let text = escape_ass_text(&cue.text);
        // Infallible: writing to a String cannot fail
        let _ = writeln!(doc, "Dialogue: 0,{},{},Default,,0,0,0,,{}", start, end, text);
    }

    debug!(
        "Rendered ASS document for segment {} ({} cues)",
        clip.segment_id,
        clip.captions.len()
    );
    doc
}

/// Script info, style table and events header
fn ass_header(style: &CaptionStyle, play_res: (u32, u32)) -> String {
    let (res_x, res_y) = play_res;
    format!(
        "[Script Info]\n\
         ScriptType: v4.00+\n\
         PlayResX: {res_x}\n\
         PlayResY: {res_y}\n\
         \n\
         [V4+ Styles]\n\
         Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, \
         BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, \
         BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding\n\
         Style: Default,{font},{size},{primary},&H000000FF,{outline_colour},{back},{bold},0,0,0,\
         100,100,0,0,{border_style},{outline},0,{alignment},80,80,{margin_v},1\n\
         \n\
         [Events]\n\
         Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text\n",
        res_x = res_x,
        res_y = res_y,
        font = style.font_name,
        size = style.font_size,
        primary = style.primary_colour,
        outline_colour = style.outline_colour,
        back = style.back_colour,
        bold = style.bold,
        border_style = style.border_style,
        outline = style.outline,
        alignment = style.alignment,
        margin_v = style.margin_v,
    )
}

/// Escape braces so cue text cannot inject ASS override tags
fn escape_ass_text(text: &str) -> String {
    text.replace('\n', " ").replace('{', r"\{").replace('}', r"\}")
}
