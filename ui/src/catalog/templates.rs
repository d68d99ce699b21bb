/// A starting point for the playground editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarterTemplate {
    /// Stable slug, used as the render key.
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub code: &'static str,
}

pub static STARTER_TEMPLATES: [StarterTemplate; 4] = [
    StarterTemplate {
        id: "hello-world",
        title: "Hello World",
        description: "Basic View and Text components",
        code: r#"import React from 'react';
import { View, Text, StyleSheet } from 'react-native';

export default function App() {
  return (
    <View style={styles.container}>
      <Text style={styles.title}>Hello, React Native! 👋</Text>
      <Text style={styles.subtitle}>
        Welcome to your first mobile app
      </Text>
    </View>
  );
}

const styles = StyleSheet.create({
  container: {
    flex: 1,
    backgroundColor: '#0a0e27',
    alignItems: 'center',
    justifyContent: 'center',
    padding: 20,
  },
  title: {
    fontSize: 32,
    fontWeight: 'bold',
    color: '#61dafb',
    marginBottom: 10,
  },
  subtitle: {
    fontSize: 18,
    color: '#cbd5e1',
    textAlign: 'center',
  },
});"#,
    },
    StarterTemplate {
        id: "button-press",
        title: "Interactive Button",
        description: "Touchable components and state",
        code: r#"import React, { useState } from 'react';
import { View, Text, TouchableOpacity, StyleSheet } from 'react-native';

export default function App() {
  const [count, setCount] = useState(0);

  return (
    <View style={styles.container}>
      <Text style={styles.title}>Counter App</Text>
      <Text style={styles.count}>{count}</Text>

      <TouchableOpacity
        style={styles.button}
        onPress={() => setCount(count + 1)}
      >
        <Text style={styles.buttonText}>Tap Me!</Text>
      </TouchableOpacity>

      <TouchableOpacity
        style={[styles.button, styles.resetButton]}
        onPress={() => setCount(0)}
      >
        <Text style={styles.buttonText}>Reset</Text>
      </TouchableOpacity>
    </View>
  );
}

const styles = StyleSheet.create({
  container: {
    flex: 1,
    backgroundColor: '#0a0e27',
    alignItems: 'center',
    justifyContent: 'center',
    padding: 20,
  },
  title: {
    fontSize: 28,
    fontWeight: 'bold',
    color: '#61dafb',
    marginBottom: 20,
  },
  count: {
    fontSize: 72,
    fontWeight: 'bold',
    color: '#764abc',
    marginBottom: 40,
  },
  button: {
    backgroundColor: '#61dafb',
    paddingHorizontal: 40,
    paddingVertical: 15,
    borderRadius: 12,
    marginVertical: 10,
    minWidth: 200,
    alignItems: 'center',
  },
  resetButton: {
    backgroundColor: '#f76b1c',
  },
  buttonText: {
    color: '#fff',
    fontSize: 18,
    fontWeight: 'bold',
  },
});"#,
    },
    StarterTemplate {
        id: "flexbox-layout",
        title: "Flexbox Layout",
        description: "Understanding column vs row",
        code: r#"import React from 'react';
import { View, Text, StyleSheet } from 'react-native';

export default function App() {
  return (
    <View style={styles.container}>
      <Text style={styles.title}>Flexbox Demo</Text>

      <View style={styles.section}>
        <Text style={styles.label}>Column (default):</Text>
        <View style={styles.columnContainer}>
          <View style={[styles.box, { backgroundColor: '#61dafb' }]}>
            <Text style={styles.boxText}>1</Text>
          </View>
          <View style={[styles.box, { backgroundColor: '#764abc' }]}>
            <Text style={styles.boxText}>2</Text>
          </View>
          <View style={[styles.box, { backgroundColor: '#f76b1c' }]}>
            <Text style={styles.boxText}>3</Text>
          </View>
        </View>
      </View>

      <View style={styles.section}>
        <Text style={styles.label}>Row:</Text>
        <View style={styles.rowContainer}>
          <View style={[styles.box, { backgroundColor: '#61dafb' }]}>
            <Text style={styles.boxText}>1</Text>
          </View>
          <View style={[styles.box, { backgroundColor: '#764abc' }]}>
            <Text style={styles.boxText}>2</Text>
          </View>
          <View style={[styles.box, { backgroundColor: '#f76b1c' }]}>
            <Text style={styles.boxText}>3</Text>
          </View>
        </View>
      </View>
    </View>
  );
}

const styles = StyleSheet.create({
  container: {
    flex: 1,
    backgroundColor: '#0a0e27',
    padding: 20,
    justifyContent: 'center',
  },
  title: {
    fontSize: 28,
    fontWeight: 'bold',
    color: '#61dafb',
    marginBottom: 30,
    textAlign: 'center',
  },
  section: {
    marginVertical: 15,
  },
  label: {
    fontSize: 16,
    color: '#cbd5e1',
    marginBottom: 10,
  },
  columnContainer: {
    flexDirection: 'column',
    gap: 10,
  },
  rowContainer: {
    flexDirection: 'row',
    gap: 10,
  },
  box: {
    padding: 20,
    borderRadius: 12,
    alignItems: 'center',
    justifyContent: 'center',
  },
  boxText: {
    color: '#fff',
    fontSize: 24,
    fontWeight: 'bold',
  },
});"#,
    },
    StarterTemplate {
        id: "list-demo",
        title: "FlatList",
        description: "Efficient list rendering",
        code: r#"import React from 'react';
import { View, Text, FlatList, StyleSheet } from 'react-native';

const DATA = [
  { id: '1', title: 'View', description: 'Container component' },
  { id: '2', title: 'Text', description: 'Display text content' },
  { id: '3', title: 'Image', description: 'Show images' },
  { id: '4', title: 'ScrollView', description: 'Scrollable container' },
  { id: '5', title: 'FlatList', description: 'Efficient lists' },
  { id: '6', title: 'TouchableOpacity', description: 'Touchable button' },
];

export default function App() {
  const renderItem = ({ item }) => (
    <View style={styles.item}>
      <Text style={styles.itemTitle}>{item.title}</Text>
      <Text style={styles.itemDescription}>{item.description}</Text>
    </View>
  );

  return (
    <View style={styles.container}>
      <Text style={styles.header}>React Native Components</Text>
      <FlatList
        data={DATA}
        renderItem={renderItem}
        keyExtractor={item => item.id}
        contentContainerStyle={styles.list}
      />
    </View>
  );
}

const styles = StyleSheet.create({
  container: {
    flex: 1,
    backgroundColor: '#0a0e27',
    padding: 20,
  },
  header: {
    fontSize: 28,
    fontWeight: 'bold',
    color: '#61dafb',
    marginBottom: 20,
  },
  list: {
    gap: 12,
  },
  item: {
    backgroundColor: 'rgba(255, 255, 255, 0.05)',
    padding: 20,
    borderRadius: 12,
    borderWidth: 1,
    borderColor: 'rgba(97, 218, 251, 0.3)',
  },
  itemTitle: {
    fontSize: 20,
    fontWeight: 'bold',
    color: '#764abc',
    marginBottom: 5,
  },
  itemDescription: {
    fontSize: 14,
    color: '#cbd5e1',
  },
});"#,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_are_unique_and_code_is_an_app() {
        for (i, template) in STARTER_TEMPLATES.iter().enumerate() {
            assert!(template.code.contains("export default function App()"));
            assert!(STARTER_TEMPLATES[i + 1..]
                .iter()
                .all(|other| other.id != template.id));
        }
    }
}
