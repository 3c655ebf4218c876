mod menu_flow_tests;
