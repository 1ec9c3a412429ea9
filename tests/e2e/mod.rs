mod config_files;
mod outside_click;
