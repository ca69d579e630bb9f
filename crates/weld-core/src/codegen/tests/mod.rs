mod entry_point_tests;
