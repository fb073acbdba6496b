mod invalid_json;
mod root;
