mod caching_scenario;
mod scene_files;
