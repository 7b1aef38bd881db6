use std::{io::Read, path::PathBuf};

use surf_core::string_error::ErrorStringExt;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: PathBuf,
    pub draw_grid: bool,
    pub label_trends: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("names-data.txt"),
            draw_grid: true,
            label_trends: true,
        }
    }
}

impl Config {
    pub fn from_config_file() -> Result<Self, String> {
        #[allow(deprecated)]
        let Some(home) = std::env::home_dir() else {
            return Err("could not determine home directory to load config file".into());
        };
        let config_raw = {
            let path = home.join(PathBuf::from(".ranksurf"));
            let mut file = std::fs::File::open(path).err_to_string("could not open config file")?;
            let mut buf = String::new();
            file.read_to_string(&mut buf)
                .err_to_string("could not load config file")?;
            buf
        };
        Ok(Self::from_raw(&config_raw))
    }

    fn from_raw(config_raw: &str) -> Self {
        let mut config = Self::default();
        for line in config_raw.lines() {
            // Lines starting with "#" are considered comments.
            if line.starts_with('#') {
                continue;
            }
            let mut iter = line.split('=');
            let key = iter.next();
            let val = iter.next();
            match (key, val) {
                (Some("database_path"), Some(path_str)) => {
                    config.database_path = PathBuf::from(path_str);
                }
                (Some("draw_grid"), Some(flag)) => {
                    if let Ok(flag) = flag.parse::<bool>() {
                        config.draw_grid = flag;
                    } else {
                        log::warn!("could not parse 'draw_grid' as boolean")
                    }
                }
                (Some("label_trends"), Some(flag)) => {
                    if let Ok(flag) = flag.parse::<bool>() {
                        config.label_trends = flag;
                    } else {
                        log::warn!("could not parse 'label_trends' as boolean")
                    }
                }
                _ => continue,
            }
        }
        config
    }

    /// Preferences view. Returns true if the user asked for the
    /// database to be reloaded from the (possibly edited) path.
    pub fn render(&mut self, _ctx: &egui::Context, ui: &mut egui::Ui) -> bool {
        let mut reload_clicked = false;

        ui.heading("Preferences");
        ui.separator();

        ui.horizontal(|ui| {
            let label = ui.label("database file:");
            let mut path_str = self.database_path.to_string_lossy().into_owned();
            if ui
                .text_edit_singleline(&mut path_str)
                .labelled_by(label.id)
                .changed()
            {
                self.database_path = PathBuf::from(path_str);
            }
            if ui.button("Reload").clicked() {
                reload_clicked = true;
            }
        });
        ui.checkbox(&mut self.draw_grid, "draw the decade grid");
        ui.checkbox(&mut self.label_trends, "label trend lines per decade");

        reload_clicked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_keys_and_skips_comments() {
        let raw = "# RankSurf config\n\
                   database_path=/data/names.txt\n\
                   draw_grid=false\n\
                   label_trends=true\n";
        let config = Config::from_raw(raw);
        assert_eq!(config.database_path, PathBuf::from("/data/names.txt"));
        assert!(!config.draw_grid);
        assert!(config.label_trends);
    }

    #[test]
    fn unknown_keys_and_broken_values_fall_back_to_defaults() {
        let raw = "window_width=800\ndraw_grid=maybe\n";
        let config = Config::from_raw(raw);
        assert!(config.draw_grid);
        assert_eq!(config.database_path, Config::default().database_path);
    }
}
