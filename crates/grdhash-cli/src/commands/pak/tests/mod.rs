mod tests_lang;
