/// Default `workspace.toml` content. Every value is commented out so the
/// file documents the defaults without pinning them.
pub(crate) fn default_config_toml() -> String {
    r#"# Quire workspace settings
# Only override what you want to change -- missing fields use defaults.

[persistence]
# debounce_ms = 400      # 50-10000

[floating]
# default_width = 640
# default_height = 420
# min_width = 360
# min_height = 240

[layout]
# default_preset = "writing"   # writing, review, planning
# focus_order = ["outline", "draftPreview", "storyInsights", "corkboard", "timeline", "critique", "relationshipGraph"]
# gap = 6                # 0-20

[keybinds]
# focus_next = "Ctrl+Alt+Right"
# focus_prev = "Ctrl+Alt+Left"
# close_pane = "Ctrl+Alt+W"
# float_pane = "Ctrl+Alt+F"
# dock_all = "Ctrl+Alt+D"
# preset_writing = "Ctrl+Alt+1"
# preset_review = "Ctrl+Alt+2"
# preset_planning = "Ctrl+Alt+3"
"#
    .to_string()
}
