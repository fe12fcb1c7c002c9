mod tests_record;
