mod recompute_lists_working_tree;
